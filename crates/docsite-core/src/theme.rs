//! Design tokens the chrome styles are resolved against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Theme scales and breakpoints.
///
/// Numeric style values are indexes into the scale that matches the property,
/// text color values are keys into [`Theme::colors`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Theme {
    /// Named colors.
    pub colors: BTreeMap<String, String>,

    /// Margin, padding and gap scale in pixels.
    pub space: Vec<f64>,

    /// Font size scale in pixels.
    pub font_sizes: Vec<f64>,

    /// Width and height scale in pixels.
    pub sizes: Vec<f64>,

    /// Border radius scale in pixels.
    pub radii: Vec<f64>,

    /// Border width scale in pixels.
    pub border_widths: Vec<f64>,

    /// Media query thresholds, smallest first.
    pub breakpoints: Vec<String>,
}

/// A numeric theme scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Space,
    FontSizes,
    Sizes,
    Radii,
    BorderWidths,
}

impl Theme {
    /// Values of a numeric scale.
    pub fn scale(&self, scale: Scale) -> &[f64] {
        match scale {
            Scale::Space => &self.space,
            Scale::FontSizes => &self.font_sizes,
            Scale::Sizes => &self.sizes,
            Scale::Radii => &self.radii,
            Scale::BorderWidths => &self.border_widths,
        }
    }

    /// Look up a named color. Names match case-insensitively.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors
            .get(name)
            .or_else(|| {
                self.colors
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    /// Set a color, replacing an existing entry whose name differs only in case.
    pub fn set_color(&mut self, name: &str, value: &str) {
        let key = self
            .colors
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| name.to_string());
        self.colors.insert(key, value.to_string());
    }
}

fn default_colors() -> BTreeMap<String, String> {
    [
        ("text", "#282828"),
        ("background", "#ffffff"),
        ("white", "#ffffff"),
        ("black", "#000000"),
        ("primary", "#405bff"),
        ("primarySafe", "#3d59e0"),
        ("secondary", "#394370"),
        ("secondaryDark", "#191919"),
        ("grayLight", "#f5f5f5"),
        ("grayMed", "#d1d3d4"),
        ("grayDark", "#58595b"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            space: vec![0.0, 4.0, 8.0, 16.0, 24.0, 32.0, 48.0, 64.0, 96.0, 128.0],
            font_sizes: vec![12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 32.0, 48.0],
            sizes: vec![0.0, 8.0, 16.0, 24.0, 32.0, 48.0, 64.0],
            radii: vec![0.0, 4.0, 8.0, 16.0],
            border_widths: vec![0.0, 1.0, 2.0, 4.0],
            breakpoints: vec!["40em".to_string(), "52em".to_string(), "64em".to_string()],
        }
    }
}
