//! Primary navigation links shown in the page header.

use serde::{Deserialize, Serialize};

/// A top navigation link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Whether `current_path` is this link's page or a page below it.
    pub fn is_active(&self, current_path: &str) -> bool {
        let url = self.url.trim_end_matches('/');
        if url.is_empty() {
            return current_path == "/" || current_path.is_empty();
        }
        current_path == url
            || current_path
                .strip_prefix(url)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// The default documentation sections.
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/home"),
        NavItem::new("Guides", "/guides"),
        NavItem::new("SDKs", "/sdk"),
        NavItem::new("Integrations", "/integrations"),
        NavItem::new("API docs", "/api"),
    ]
}
