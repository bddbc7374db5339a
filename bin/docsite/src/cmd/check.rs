//! Check command - validate configuration and table of contents

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use docsite_core::{Config, EnvVars, Toc};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and, when given, a table of contents file.
pub fn run(config_path: &Path, toc_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?toc_path, strict, "Checking configuration");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    check_config_file(config_path, None, &mut result);

    if let Some(toc_path) = toc_path {
        println!("\nChecking table of contents...");
        match Toc::load(toc_path) {
            Ok(toc) => check_toc(&toc, &mut result),
            Err(e) => {
                result.add_error(format!("Table of contents error: {e}"));
                println!("  ✗ Table of contents invalid: {e}");
            }
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Load the configuration the way `render` does, file plus `DOCSITE__*` variables.
fn check_config_file(config_path: &Path, vars: Option<EnvVars>, result: &mut ValidationResult) {
    if !config_path.exists() {
        result.add_warning(format!(
            "Configuration file {} does not exist, defaults apply",
            config_path.display()
        ));
        return;
    }

    match Config::load_with_env_source(config_path, vars) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            check_config_values(&config, result);
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
        }
    }
}

/// Warnings for values that load fine but look unintended.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if config.nav.is_empty() {
        result.add_warning("No navigation links configured");
    }

    let mut seen = std::collections::HashSet::new();
    for item in &config.nav {
        if !seen.insert(item.url.as_str()) {
            result.add_warning(format!("Duplicate navigation url: {}", item.url));
        }
        if !item.url.starts_with('/') && !item.url.contains("://") {
            result.add_warning(format!(
                "Navigation url '{}' is relative, it will resolve against the current page",
                item.url
            ));
        }
    }

    if config.search.enabled && config.search.placeholder.trim().is_empty() {
        result.add_warning("Search is enabled but has no placeholder text");
    }

    if config.theme().breakpoints.is_empty() {
        result.add_warning("No breakpoints configured, responsive styles collapse to one value");
    }
}

fn check_toc(toc: &Toc, result: &mut ValidationResult) {
    match toc.first_level() {
        None => result.add_warning(
            "Table of contents has no entries under its first heading, nothing will render",
        ),
        Some([]) => result.add_warning("Table of contents renders an empty list"),
        Some(entries) => {
            println!("  ✓ {} entries to render", entries.len());

            let mut seen = std::collections::HashSet::new();
            for entry in entries {
                if !seen.insert(entry.url.as_str()) {
                    result.add_warning(format!("Duplicate table of contents url: {}", entry.url));
                }
            }
        }
    }

    if toc.items.len() > 1 {
        result.add_warning(format!(
            "Table of contents has {} top-level headings, only the first one is listed",
            toc.items.len()
        ));
    }
}
