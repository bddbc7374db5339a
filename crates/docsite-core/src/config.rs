//! Chrome configuration management.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    chrome::DEFAULT_TOC_TITLE,
    error::{CoreError, Result},
    icons,
    nav::{NavItem, default_nav},
    theme::Theme,
};

/// Main configuration structure for the site chrome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Brand settings.
    #[serde(default)]
    pub brand: BrandConfig,

    /// Search input settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Primary navigation links.
    #[serde(default = "default_nav")]
    pub nav: Vec<NavItem>,

    /// Table of contents settings.
    #[serde(default)]
    pub toc: TocConfig,

    /// Theme overrides.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Brand mark settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandConfig {
    /// Text shown next to the logo.
    #[serde(default = "default_brand_label")]
    pub label: String,

    /// Icon shown on wide screens.
    #[serde(default = "default_logo")]
    pub logo: String,

    /// Icon shown on narrow screens.
    #[serde(default = "default_mark")]
    pub mark: String,

    /// Where the brand links to.
    #[serde(default = "default_home")]
    pub home_url: String,
}

/// Search input settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Whether the search input is shown.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Placeholder text.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

/// Table of contents settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocConfig {
    /// Heading above the entries.
    #[serde(default = "default_toc_title")]
    pub title: String,
}

/// Overrides applied on top of [`Theme::default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Extra or replacement colors.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    /// Replacement breakpoints.
    #[serde(default)]
    pub breakpoints: Option<Vec<String>>,

    /// Replacement space scale.
    #[serde(default)]
    pub space: Option<Vec<f64>>,

    /// Replacement font size scale.
    #[serde(default)]
    pub font_sizes: Option<Vec<f64>>,

    /// Replacement sizes scale.
    #[serde(default)]
    pub sizes: Option<Vec<f64>>,

    /// Replacement radii scale.
    #[serde(default)]
    pub radii: Option<Vec<f64>>,

    /// Replacement border width scale.
    #[serde(default)]
    pub border_widths: Option<Vec<f64>>,
}

/// Environment variables as `NAME => value`, in place of the process environment.
pub type EnvVars = config::Map<String, String>;

// Default value functions
fn default_brand_label() -> String {
    "DOCS".to_string()
}

fn default_logo() -> String {
    icons::BRAND_LOGO.name.to_string()
}

fn default_mark() -> String {
    icons::BRAND_MARK.name.to_string()
}

fn default_home() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    "Search".to_string()
}

fn default_toc_title() -> String {
    DEFAULT_TOC_TITLE.to_string()
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            label: default_brand_label(),
            logo: default_logo(),
            mark: default_mark(),
            home_url: default_home(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            placeholder: default_placeholder(),
        }
    }
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            title: default_toc_title(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            search: SearchConfig::default(),
            nav: default_nav(),
            toc: TocConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration layered with `DOCSITE__*` environment variables.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_with_env_source(path, None)
    }

    /// Like [`Config::load_with_env`], reading variables from `vars` when given.
    ///
    /// Keys coming from the environment are lowercased, so
    /// `DOCSITE__THEME__COLORS__GRAYDARK` lands as `graydark`.
    pub fn load_with_env_source(path: &Path, vars: Option<EnvVars>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("DOCSITE")
                    .separator("__")
                    .source(vars),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.brand.label.trim().is_empty() {
            return Err(CoreError::config("brand.label cannot be empty"));
        }

        for name in [&self.brand.logo, &self.brand.mark] {
            if icons::lookup(name).is_none() {
                return Err(CoreError::unknown_icon(name.as_str()));
            }
        }

        if let Some(item) = self.nav.iter().find(|item| item.url.trim().is_empty()) {
            return Err(CoreError::config(format!(
                "nav link '{}' has an empty url",
                item.label
            )));
        }

        if let Some(breakpoints) = &self.theme.breakpoints {
            if breakpoints.iter().any(|bp| bp.trim().is_empty()) {
                return Err(CoreError::config("theme.breakpoints cannot contain empty values"));
            }
        }

        if self.search.enabled && self.search.placeholder.is_empty() {
            tracing::warn!("search.placeholder is empty, the search input will have no hint");
        }

        Ok(())
    }

    /// The default theme with this configuration's overrides applied.
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        for (name, value) in &self.theme.colors {
            theme.set_color(name, value);
        }
        if let Some(breakpoints) = &self.theme.breakpoints {
            theme.breakpoints = breakpoints.clone();
        }
        if let Some(space) = &self.theme.space {
            theme.space = space.clone();
        }
        if let Some(font_sizes) = &self.theme.font_sizes {
            theme.font_sizes = font_sizes.clone();
        }
        if let Some(sizes) = &self.theme.sizes {
            theme.sizes = sizes.clone();
        }
        if let Some(radii) = &self.theme.radii {
            theme.radii = radii.clone();
        }
        if let Some(border_widths) = &self.theme.border_widths {
            theme.border_widths = border_widths.clone();
        }
        theme
    }
}
