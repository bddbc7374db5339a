//! Embedded SVG icon assets.

use crate::chrome::classes;

/// A statically embedded SVG icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconAsset {
    /// Name the icon is looked up by.
    pub name: &'static str,

    /// SVG `viewBox` attribute.
    pub view_box: &'static str,

    /// Path data, drawn in order.
    pub paths: &'static [&'static str],
}

/// Where an icon is placed, which selects its styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconVariant {
    #[default]
    Default,
    Header,
    Search,
}

impl IconVariant {
    /// Class list for an icon with this variant.
    pub fn class(self) -> String {
        match self {
            Self::Default => classes::ICON.to_string(),
            Self::Header => format!("{0} {0}--header", classes::ICON),
            Self::Search => format!("{0} {0}--search", classes::ICON),
        }
    }
}

pub const BRAND_LOGO: IconAsset = IconAsset {
    name: "brand-logo",
    view_box: "0 0 120 24",
    paths: &["M12 2 22 12 12 22 2 12z", "M30 8h82v8H30z"],
};

pub const BRAND_MARK: IconAsset = IconAsset {
    name: "brand-mark",
    view_box: "0 0 24 24",
    paths: &["M12 2 22 12 12 22 2 12z", "M12 7 17 12 12 17 7 12z"],
};

pub const SEARCH: IconAsset = IconAsset {
    name: "search",
    view_box: "0 0 24 24",
    paths: &[
        "M15.5 14h-.79l-.28-.27A6.47 6.47 0 0 0 16 9.5 6.5 6.5 0 1 0 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z",
    ],
};

pub const MENU: IconAsset = IconAsset {
    name: "menu",
    view_box: "0 0 24 24",
    paths: &["M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z"],
};

/// Every embedded icon.
pub const ALL: &[IconAsset] = &[BRAND_LOGO, BRAND_MARK, SEARCH, MENU];

/// Find an icon by name.
pub fn lookup(name: &str) -> Option<&'static IconAsset> {
    ALL.iter().find(|icon| icon.name == name)
}
