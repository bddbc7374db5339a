//! Inline SVG icon component.

use docsite_core::{IconVariant, chrome::merge_classes, icons};
use leptos::{logging::warn, prelude::*};

/// Renders an embedded icon as inline SVG, or nothing for unknown names.
#[component]
pub fn Icon(
    /// Embedded icon name.
    #[prop(into)]
    name: String,
    /// Placement, selects the icon styling.
    #[prop(optional)]
    variant: IconVariant,
    /// Extra classes.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let Some(icon) = icons::lookup(&name) else {
        warn!("unknown icon: {name}");
        return None;
    };

    let class = merge_classes(&variant.class(), class.as_deref());

    Some(view! {
      <svg
        class=class
        viewBox=icon.view_box
        aria-hidden="true"
        focusable="false"
        data-icon=icon.name
      >
        {icon.paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
      </svg>
    })
}
