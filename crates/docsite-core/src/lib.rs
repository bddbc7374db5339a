//! docsite Core Library
//!
//! Data model, theme, styles and configuration for the documentation site
//! chrome: the page header and the table of contents sidebar.

pub mod chrome;
pub mod config;
pub mod error;
pub mod icons;
pub mod nav;
pub mod style;
pub mod theme;
pub mod toc;

pub use chrome::{DEFAULT_TOC_TITLE, EMPTY_TOC_WARNING, chrome_css, chrome_stylesheet, classes};
pub use config::{Config, EnvVars};
pub use error::{CoreError, Result};
pub use icons::{IconAsset, IconVariant};
pub use nav::NavItem;
pub use style::{Responsive, StyleValue, Stylesheet, Sx};
pub use theme::Theme;
pub use toc::{Heading, OutlineHeading, Slugger, Toc, slugify};
