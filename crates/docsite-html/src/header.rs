//! Page header: brand, primary navigation, search input and menu toggle.

use docsite_core::{
    Config, IconVariant, NavItem, classes,
    config::{BrandConfig, SearchConfig},
};
use tracing::debug;

use crate::{attrs::escape_html, icon::render_icon};

/// Render the page header.
///
/// `current_path` marks the matching navigation link as the current page.
pub fn render_header(config: &Config, current_path: &str) -> String {
    debug!(path = current_path, "rendering header");

    format!(
        concat!(
            r#"<header class="{header}">"#,
            r#"<div class="{grid}">"#,
            "{brand}",
            r#"<span class="{nav}">"#,
            "{mark}",
            r#"<span class="{slot}">{top_nav}</span>"#,
            "{search}",
            r#"<span class="{hamburger_slot}">{hamburger}</span>"#,
            "</span>",
            "</div>",
            "</header>"
        ),
        header = classes::HEADER,
        grid = classes::HEADER_GRID,
        brand = render_brand(&config.brand),
        nav = classes::HEADER_NAV,
        mark = render_icon(&config.brand.mark, IconVariant::Header, Some(classes::BRAND_MARK)),
        slot = classes::TOP_NAV_SLOT,
        top_nav = render_top_nav(&config.nav, current_path),
        search = render_search(&config.search),
        hamburger_slot = classes::HAMBURGER_SLOT,
        hamburger = render_hamburger(),
    )
}

/// Logo and label, shown from the first breakpoint up.
pub fn render_brand(brand: &BrandConfig) -> String {
    format!(
        r#"<a href="{}" class="{}">{}<span class="{}">{}</span></a>"#,
        escape_html(&brand.home_url),
        classes::BRAND,
        render_icon(&brand.logo, IconVariant::Header, Some(classes::BRAND_LOGO)),
        classes::BRAND_LABEL,
        escape_html(&brand.label)
    )
}

/// Primary navigation list.
pub fn render_top_nav(items: &[NavItem], current_path: &str) -> String {
    let links: String = items
        .iter()
        .map(|item| {
            let current = if item.is_active(current_path) {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<li><a href="{}" class="{}"{}>{}</a></li>"#,
                escape_html(&item.url),
                classes::TOP_NAV_LINK,
                current,
                escape_html(&item.label)
            )
        })
        .collect();

    format!(
        r#"<nav class="{}" aria-label="Main navigation"><ul class="{}">{}</ul></nav>"#,
        classes::TOP_NAV,
        classes::TOP_NAV_LIST,
        links
    )
}

/// Search input with its icon. Empty when search is disabled.
pub fn render_search(search: &SearchConfig) -> String {
    if !search.enabled {
        return String::new();
    }

    let placeholder = escape_html(&search.placeholder);
    format!(
        r#"<div class="{}" role="search">{}<input type="text" class="{}" placeholder="{}" aria-label="{}"></div>"#,
        classes::SEARCH,
        render_icon("search", IconVariant::Search, None),
        classes::SEARCH_INPUT,
        placeholder,
        placeholder
    )
}

/// Button toggling the side navigation on narrow screens.
pub fn render_hamburger() -> String {
    format!(
        r#"<button type="button" class="{}" aria-label="Toggle navigation" aria-expanded="false">{}</button>"#,
        classes::HAMBURGER,
        render_icon("menu", IconVariant::Header, None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_header_structure() {
        let html = render_header(&Config::default(), "/");

        assert!(html.starts_with(r#"<header class="docsite-header"><div class="docsite-header-grid">"#));
        assert!(html.ends_with("</div></header>"));
        assert!(html.contains(r#"<span class="docsite-brand-label">DOCS</span>"#));
        assert!(html.contains(r#"data-icon="brand-logo""#));
        assert!(html.contains(r#"data-icon="brand-mark""#));
        assert!(html.contains(r#"placeholder="Search""#));
        assert!(html.contains(r#"class="docsite-hamburger""#));
    }

    #[test]
    fn test_top_nav_marks_current_page() {
        let items = vec![
            NavItem::new("Guides", "/guides"),
            NavItem::new("SDKs", "/sdk"),
        ];
        let html = render_top_nav(&items, "/sdk/server-side");

        assert!(html.contains(r#"<a href="/guides" class="docsite-topnav-link">Guides</a>"#));
        assert!(html.contains(
            r#"<a href="/sdk" class="docsite-topnav-link" aria-current="page">SDKs</a>"#
        ));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_search_disabled() {
        let search = SearchConfig {
            enabled: false,
            ..SearchConfig::default()
        };
        assert_eq!(render_search(&search), "");

        let mut config = Config::default();
        config.search.enabled = false;
        assert!(!render_header(&config, "/").contains("<input"));
    }

    #[test]
    fn test_brand_is_escaped() {
        let brand = BrandConfig {
            label: "Docs & <APIs>".to_string(),
            ..BrandConfig::default()
        };
        let html = render_brand(&brand);
        assert!(html.contains("Docs &amp; &lt;APIs&gt;"));
        assert!(html.starts_with(r#"<a href="/" class="docsite-brand">"#));
    }
}
