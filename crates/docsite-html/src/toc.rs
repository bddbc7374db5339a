//! Table of contents sidebar.

use docsite_core::{DEFAULT_TOC_TITLE, EMPTY_TOC_WARNING, Heading, Toc, classes};
use tracing::warn;

use crate::attrs::{Attributes, escape_html};

/// Options for [`render_table_of_contents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// Heading above the entries.
    pub title: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TOC_TITLE.to_string(),
        }
    }
}

impl TocOptions {
    /// Options with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Render the sidebar listing the first level of `toc`.
///
/// Returns `None`, after logging a warning, when the first top-level heading
/// has no child list. `attrs` are spread onto the root container.
pub fn render_table_of_contents(
    toc: &Toc,
    options: &TocOptions,
    attrs: &Attributes,
) -> Option<String> {
    let Some(children) = toc.first_level() else {
        warn!("{EMPTY_TOC_WARNING}");
        return None;
    };

    let entries: String = children.iter().map(render_entry).collect();

    Some(format!(
        r#"<div{}><h5 class="{}">{}</h5><ul class="{}">{}</ul></div>"#,
        attrs.render_with_class(classes::TOC),
        classes::TOC_TITLE,
        escape_html(&options.title),
        classes::TOC_LIST,
        entries
    ))
}

fn render_entry(heading: &Heading) -> String {
    format!(
        r#"<li class="{}"><a href="{}" class="{}">{}</a></li>"#,
        classes::TOC_ITEM,
        escape_html(&heading.url),
        classes::TOC_LINK,
        escape_html(&heading.title)
    )
}
