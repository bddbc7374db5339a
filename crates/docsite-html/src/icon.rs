//! Inline SVG icons.

use docsite_core::{
    IconVariant,
    chrome::merge_classes,
    icons::{self, IconAsset},
};

use crate::attrs::escape_html;

/// Render an embedded icon as inline SVG.
///
/// Unknown names log a warning and render nothing.
pub fn render_icon(name: &str, variant: IconVariant, extra_class: Option<&str>) -> String {
    match icons::lookup(name) {
        Some(icon) => render_asset(icon, variant, extra_class),
        None => {
            tracing::warn!(icon = name, "unknown icon, rendering nothing");
            String::new()
        }
    }
}

/// Render an icon asset as inline SVG.
pub fn render_asset(icon: &IconAsset, variant: IconVariant, extra_class: Option<&str>) -> String {
    let class = merge_classes(&variant.class(), extra_class);
    let paths: String = icon
        .paths
        .iter()
        .map(|d| format!(r#"<path d="{d}"/>"#))
        .collect();

    format!(
        r#"<svg class="{}" viewBox="{}" aria-hidden="true" focusable="false" data-icon="{}">{}</svg>"#,
        escape_html(&class),
        icon.view_box,
        icon.name,
        paths
    )
}
