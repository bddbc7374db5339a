//! docsite HTML Renderers
//!
//! Server-side rendering of the documentation chrome to HTML strings, for
//! static pages and for environments without a Leptos runtime.
//!
//! # Example
//!
//! ```
//! use docsite_core::{Heading, Toc};
//! use docsite_html::{Attributes, TocOptions, render_table_of_contents};
//!
//! let toc = Toc::new(vec![Heading::new("#guide", "Guide").with_items(vec![
//!     Heading::new("#install", "Install"),
//!     Heading::new("#usage", "Usage"),
//! ])]);
//!
//! let html = render_table_of_contents(&toc, &TocOptions::default(), &Attributes::new()).unwrap();
//! assert_eq!(html.matches("<li ").count(), 2);
//! ```

pub mod attrs;
pub mod header;
pub mod icon;
pub mod page;
pub mod template;
pub mod toc;

use thiserror::Error;

pub use attrs::{Attributes, escape_html};
pub use header::render_header;
pub use icon::render_icon;
pub use page::{ChromeParts, render_chrome, render_preview_page, write_chrome};
pub use template::{Template, TemplateContext, TemplateError};
pub use toc::{TocOptions, render_table_of_contents};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;
