//! docsite CLI Library
//!
//! Command implementations for the `docsite` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (render, check, serve)
//! - [`server`] - Static preview server
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use docsite::cmd;
//!
//! // Render the chrome for a page's table of contents
//! cmd::render::run(
//!     Path::new("docsite.toml"),
//!     Path::new("toc.json"),
//!     Path::new("public"),
//!     "/",
//! )
//! .unwrap();
//! ```

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use docsite_core::{Config, Toc};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Load the chrome configuration, falling back to defaults when the file is missing.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::warn!(?path, "configuration file not found, using defaults");
        return Ok(Config::default());
    }

    Config::load_with_env(path).wrap_err("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/docsite.toml")).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("docsite.toml");
        std::fs::write(&path, "[brand]\nlabel = \"\"\n").expect("write");

        assert!(load_config(&path).is_err());
    }
}
