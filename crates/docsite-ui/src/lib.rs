//! docsite UI Components
//!
//! Leptos components for the documentation site chrome.
//!
//! # Components
//!
//! ## Header
//! - [`Header`] - Brand, primary navigation, search input and menu toggle
//! - [`TopNav`] - Primary navigation links
//! - [`SearchInput`] - Search text input (`/` to focus)
//! - [`Hamburger`] - Side navigation toggle for narrow screens
//!
//! ## Table of contents
//! - [`TableOfContents`] - First level of the page's headings
//!
//! ## Shared
//! - [`Icon`] - Embedded SVG icons
//!
//! # Example
//!
//! ```ignore
//! use docsite_core::{Config, Toc};
//! use docsite_ui::{Header, TableOfContents};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Page(toc: Toc) -> impl IntoView {
//!     provide_context(Config::default());
//!
//!     view! {
//!         <Header />
//!         <TableOfContents toc=toc {..} id="toc" />
//!     }
//! }
//! ```

pub mod header;
pub mod icon;
pub mod toc;

pub use header::{CurrentPath, Hamburger, Header, SearchInput, SearchQuery, SideNavState, TopNav};
pub use icon::Icon;
pub use toc::{TableOfContents, sidebar_entries};
