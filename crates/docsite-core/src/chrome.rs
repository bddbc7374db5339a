//! Class names and styles shared by the header and table of contents renderers.

use crate::{
    steps,
    style::{Stylesheet, Sx},
    theme::Theme,
};

/// CSS class names used by the chrome markup.
pub mod classes {
    pub const HEADER: &str = "docsite-header";
    pub const HEADER_GRID: &str = "docsite-header-grid";
    pub const BRAND: &str = "docsite-brand";
    pub const BRAND_LOGO: &str = "docsite-brand-logo";
    pub const BRAND_LABEL: &str = "docsite-brand-label";
    pub const HEADER_NAV: &str = "docsite-header-nav";
    pub const BRAND_MARK: &str = "docsite-brand-mark";
    pub const TOP_NAV_SLOT: &str = "docsite-topnav-slot";
    pub const TOP_NAV: &str = "docsite-topnav";
    pub const TOP_NAV_LIST: &str = "docsite-topnav-list";
    pub const TOP_NAV_LINK: &str = "docsite-topnav-link";
    pub const SEARCH: &str = "docsite-search";
    pub const SEARCH_INPUT: &str = "docsite-search-input";
    pub const HAMBURGER_SLOT: &str = "docsite-hamburger-slot";
    pub const HAMBURGER: &str = "docsite-hamburger";
    pub const ICON: &str = "docsite-icon";
    pub const TOC: &str = "docsite-toc";
    pub const TOC_TITLE: &str = "docsite-toc-title";
    pub const TOC_LIST: &str = "docsite-toc-list";
    pub const TOC_ITEM: &str = "docsite-toc-item";
    pub const TOC_LINK: &str = "docsite-toc-link";
}

/// Heading shown above the table of contents entries.
pub const DEFAULT_TOC_TITLE: &str = "On this page";

/// Warning logged when a table of contents has nothing to list.
pub const EMPTY_TOC_WARNING: &str = "There's no heading to render for toc";

fn class(name: &str) -> String {
    format!(".{name}")
}

fn dashed_divider() -> Sx {
    Sx::new()
        .prop("borderBottomStyle", "dashed")
        .prop("borderBottomWidth", 1)
        .prop("borderColor", "grayMed")
}

fn header_rules(sheet: &mut Stylesheet) {
    use classes::*;

    sheet.push(
        &class(HEADER),
        Sx::new()
            .prop("gridArea", "header")
            .prop("bg", "secondaryDark")
            .prop("color", "white"),
    );
    sheet.push(
        &class(HEADER_GRID),
        Sx::new()
            .prop("display", "grid")
            .prop(
                "gridTemplateColumns",
                steps!["100%", "18rem auto", "18rem 48rem auto"],
            )
            .prop("minHeight", "100%")
            .prop(
                "gridTemplateAreas",
                steps!["'mobile'", "'brand nav nav'", "'brand nav nav'"],
            ),
    );
    sheet.push(
        &class(BRAND),
        Sx::new()
            .prop("gridArea", "brand")
            .prop("display", steps!["none", "flex"])
            .prop("alignItems", "center")
            .prop("ml", steps![4, 6, 6]),
    );
    sheet.push(&class(BRAND_LOGO), Sx::new().prop("height", steps![_, 3, 3]));
    sheet.push(
        &class(BRAND_LABEL),
        Sx::new()
            .prop("pl", steps![_, 1, 1])
            .prop("pt", steps![_, 1, 1])
            .prop("fontSize", steps![_, 2, 2])
            .prop("display", steps!["none", "block", "block"]),
    );
    sheet.push(
        &class(HEADER_NAV),
        Sx::new()
            .prop("gridArea", steps!["mobile", "nav"])
            .prop("display", "flex")
            .prop("height", "100%")
            .prop("alignItems", "center")
            .prop("justifyContent", "space-between")
            .prop("whiteSpace", "nowrap"),
    );
    sheet.push(
        &class(BRAND_MARK),
        Sx::new()
            .prop("height", 3)
            .prop("mx", 4)
            .prop("display", steps!["block", "none"]),
    );
    sheet.push(&class(TOP_NAV_SLOT), Sx::new().prop("ml", steps![0, 7, 9]));
    sheet.push(
        &class(SEARCH),
        Sx::new()
            .prop("gridArea", "nav")
            .prop("display", "flex")
            .prop("alignItems", "center")
            .prop("justifyContent", "flex-end")
            .prop("width", steps!["100%", "100%", "35%"])
            .prop("mx", steps![0, 4])
            .prop("ml", steps![0, 0, 4]),
    );
    sheet.push(
        &class(SEARCH_INPUT),
        Sx::new()
            .prop("pl", 2)
            .prop("border", 0)
            .prop("borderRadius", 1)
            .prop("height", 4)
            .prop("fontSize", 4)
            .prop("width", "100%")
            .nest("::placeholder", Sx::new().prop("fontSize", steps![4, 3, 4])),
    );
    sheet.push(
        &class(HAMBURGER_SLOT),
        Sx::new()
            .prop("display", steps!["block", "none"])
            .prop("mx", 4),
    );
    sheet.push(
        &class(HAMBURGER),
        Sx::new()
            .prop("bg", "transparent")
            .prop("border", 0)
            .prop("color", "inherit")
            .prop("cursor", "pointer")
            .prop("p", 0),
    );
}

fn top_nav_rules(sheet: &mut Stylesheet) {
    use classes::*;

    sheet.push(
        &class(TOP_NAV_LIST),
        Sx::new()
            .prop("display", "flex")
            .prop("gap", 4)
            .prop("listStyle", "none")
            .prop("m", 0)
            .prop("p", 0),
    );
    sheet.push(
        &class(TOP_NAV_LINK),
        Sx::new()
            .prop("color", "inherit")
            .prop("textDecoration", "none")
            .prop("fontSize", 2)
            .nest(":hover", Sx::new().prop("color", "grayMed"))
            .nest(
                "&[aria-current=\"page\"]",
                Sx::new().prop("fontWeight", 700),
            ),
    );
}

fn icon_rules(sheet: &mut Stylesheet) {
    use classes::ICON;

    sheet.push(
        &class(ICON),
        Sx::new().prop("display", "inline-block").prop("fill", "currentColor"),
    );
    sheet.push(
        &format!(".{ICON}--header"),
        Sx::new().prop("color", "white").prop("height", 3),
    );
    sheet.push(
        &format!(".{ICON}--search"),
        Sx::new()
            .prop("color", "grayDark")
            .prop("height", 2)
            .prop("mr", 2)
            .prop("flexShrink", 0),
    );
}

fn toc_rules(sheet: &mut Stylesheet) {
    use classes::*;

    sheet.push(
        &class(TOC_TITLE),
        dashed_divider().prop("padding", 3).prop("pt", "6.25rem"),
    );
    sheet.push(
        &class(TOC_LIST),
        Sx::new().prop("listStyle", "none").prop("m", 0).prop("p", 0),
    );
    sheet.push(
        &class(TOC_ITEM),
        Sx::new()
            .prop("lineHeight", 1.5)
            .prop("borderBottomStyle", "dashed")
            .prop("borderBottomWidth", 1)
            .prop("borderColor", "grayMed")
            .prop("padding", 3),
    );
    sheet.push(
        &class(TOC_LINK),
        Sx::new()
            .prop("color", "inherit")
            .prop("textDecoration", "none")
            .nest(":visited", Sx::new().prop("color", "inherit"))
            .nest(
                ":hover",
                Sx::new()
                    .prop("textDecoration", "none")
                    .prop("color", "primarySafe"),
            ),
    );
}

/// All rules for the header, top navigation, icons and table of contents.
pub fn chrome_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new();
    header_rules(&mut sheet);
    top_nav_rules(&mut sheet);
    icon_rules(&mut sheet);
    toc_rules(&mut sheet);
    sheet
}

/// The chrome stylesheet rendered against `theme`.
pub fn chrome_css(theme: &Theme) -> String {
    chrome_stylesheet().to_css(theme)
}

/// Class list for an element with its own class plus caller supplied classes.
pub fn merge_classes(own: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{own} {extra}"),
        None => own.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_css() {
        let css = chrome_css(&Theme::default());

        assert!(css.contains(".docsite-header {\n  grid-area: header;\n  background-color: #191919;\n  color: #ffffff;\n}"));
        assert!(css.contains("grid-template-areas: 'mobile';"));
        assert!(css.contains("@media screen and (min-width: 40em)"));
        assert!(css.contains("grid-template-columns: 18rem 48rem auto;"));
    }

    #[test]
    fn test_toc_css() {
        let css = chrome_css(&Theme::default());

        assert!(css.contains(".docsite-toc-title {"));
        assert!(css.contains("border-bottom-style: dashed;"));
        assert!(css.contains("padding-top: 6.25rem;"));
        assert!(css.contains(".docsite-toc-item {\n  line-height: 1.5;"));
        assert!(css.contains(".docsite-toc-link:hover {\n  text-decoration: none;\n  color: #3d59e0;\n}"));
    }

    #[test]
    fn test_css_follows_theme() {
        let mut theme = Theme::default();
        theme
            .colors
            .insert("secondaryDark".to_string(), "#000080".to_string());

        let css = chrome_css(&theme);
        assert!(css.contains("background-color: #000080;"));
    }

    #[test]
    fn test_merge_classes() {
        assert_eq!(merge_classes("a", None), "a");
        assert_eq!(merge_classes("a", Some("  ")), "a");
        assert_eq!(merge_classes("a", Some("b c")), "a b c");
    }
}
