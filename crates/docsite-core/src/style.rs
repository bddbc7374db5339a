//! Theme-aware style objects compiled to CSS.
//!
//! An [`Sx`] is an ordered list of CSS properties written the short way
//! (`ml`, `bg`, `fontSize`), whose values may be theme scale indexes and may
//! vary per breakpoint. A [`Stylesheet`] turns selectors plus style objects
//! into plain CSS with one media query per breakpoint in use.

use std::fmt::Write;

use crate::theme::{Scale, Theme};

/// A single style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Scale index or raw number.
    Number(f64),
    /// Color key or raw CSS text.
    Text(String),
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A value that may change at each breakpoint.
///
/// Step `0` applies everywhere, step `i` from `breakpoints[i - 1]` upwards.
/// `None` steps inherit the previous value.
#[derive(Debug, Clone, PartialEq)]
pub enum Responsive<T> {
    Value(T),
    Steps(Vec<Option<T>>),
}

impl<T> Responsive<T> {
    /// The steps that carry a value, with their index.
    pub fn steps(&self) -> Vec<(usize, &T)> {
        match self {
            Self::Value(value) => vec![(0, value)],
            Self::Steps(steps) => steps
                .iter()
                .enumerate()
                .filter_map(|(i, step)| step.as_ref().map(|v| (i, v)))
                .collect(),
        }
    }
}

impl From<StyleValue> for Responsive<StyleValue> {
    fn from(value: StyleValue) -> Self {
        Self::Value(value)
    }
}

impl From<i32> for Responsive<StyleValue> {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Responsive<StyleValue> {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Responsive<StyleValue> {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Responsive<StyleValue> {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

/// Build a per-breakpoint value. `_` skips a step.
///
/// ```
/// use docsite_core::steps;
///
/// let display = steps!["none", "flex"];
/// let height = steps![_, 3, 3];
/// # let _ = (display, height);
/// ```
#[macro_export]
macro_rules! steps {
    (@step _) => {
        ::core::option::Option::None
    };
    (@step $value:tt) => {
        ::core::option::Option::Some($crate::style::StyleValue::from($value))
    };
    ($($value:tt),+ $(,)?) => {
        $crate::style::Responsive::Steps(vec![$($crate::steps!(@step $value)),+])
    };
}

#[derive(Debug, Clone, PartialEq)]
enum SxEntry {
    Prop {
        name: String,
        value: Responsive<StyleValue>,
    },
    Nested {
        selector: String,
        sx: Sx,
    },
}

/// An ordered style object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sx {
    entries: Vec<SxEntry>,
}

impl Sx {
    /// Create an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property. Later properties win over earlier ones.
    pub fn prop(mut self, name: &str, value: impl Into<Responsive<StyleValue>>) -> Self {
        self.entries.push(SxEntry::Prop {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Add styles for a nested selector.
    ///
    /// Selectors starting with `:` attach to the parent (`:hover`,
    /// `::placeholder`), `&` is replaced by the parent, anything else is a
    /// descendant.
    pub fn nest(mut self, selector: &str, sx: Sx) -> Self {
        self.entries.push(SxEntry::Nested {
            selector: selector.to_string(),
            sx,
        });
        self
    }

    /// Whether no properties or nested selectors were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve one style property against the theme into CSS declarations.
pub fn resolve(theme: &Theme, prop: &str, value: &StyleValue) -> Vec<(String, String)> {
    let css_value = match value {
        StyleValue::Number(n) => resolve_number(theme, prop, *n),
        StyleValue::Text(text) if is_color(prop) => {
            theme.color(text).unwrap_or(text.as_str()).to_string()
        }
        StyleValue::Text(text) => text.clone(),
    };

    css_properties(prop)
        .into_iter()
        .map(|name| (name, css_value.clone()))
        .collect()
}

fn resolve_number(theme: &Theme, prop: &str, n: f64) -> String {
    if is_unitless(prop) {
        return format_number(n);
    }

    let scaled = scale_for(prop).and_then(|scale| {
        if n.fract() != 0.0 {
            return None;
        }
        let value = *theme.scale(scale).get(n.abs() as usize)?;
        Some(if n < 0.0 && scale == Scale::Space {
            -value
        } else {
            value
        })
    });

    px(scaled.unwrap_or(n))
}

fn px(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", format_number(n))
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn is_unitless(prop: &str) -> bool {
    matches!(
        prop,
        "lineHeight" | "fontWeight" | "opacity" | "zIndex" | "flex" | "flexGrow" | "flexShrink" | "order"
    )
}

fn is_color(prop: &str) -> bool {
    matches!(prop, "color" | "bg" | "fill" | "stroke") || prop.ends_with("Color")
}

fn scale_for(prop: &str) -> Option<Scale> {
    if prop.starts_with("border") && prop.ends_with("Width") {
        return Some(Scale::BorderWidths);
    }
    if prop.ends_with("Radius") {
        return Some(Scale::Radii);
    }

    match prop {
        "m" | "mt" | "mr" | "mb" | "ml" | "mx" | "my" | "p" | "pt" | "pr" | "pb" | "pl" | "px"
        | "py" | "gap" | "rowGap" | "columnGap" | "top" | "right" | "bottom" | "left" => {
            Some(Scale::Space)
        }
        p if p.starts_with("margin") || p.starts_with("padding") => Some(Scale::Space),
        "fontSize" => Some(Scale::FontSizes),
        "width" | "height" | "minWidth" | "maxWidth" | "minHeight" | "maxHeight" | "size"
        | "flexBasis" => Some(Scale::Sizes),
        _ => None,
    }
}

fn css_properties(prop: &str) -> Vec<String> {
    let expanded: &[&str] = match prop {
        "m" => &["margin"],
        "mt" => &["margin-top"],
        "mr" => &["margin-right"],
        "mb" => &["margin-bottom"],
        "ml" => &["margin-left"],
        "mx" => &["margin-left", "margin-right"],
        "my" => &["margin-top", "margin-bottom"],
        "p" => &["padding"],
        "pt" => &["padding-top"],
        "pr" => &["padding-right"],
        "pb" => &["padding-bottom"],
        "pl" => &["padding-left"],
        "px" => &["padding-left", "padding-right"],
        "py" => &["padding-top", "padding-bottom"],
        "bg" => &["background-color"],
        "size" => &["width", "height"],
        _ => return vec![kebab_case(prop)],
    };
    expanded.iter().map(|s| (*s).to_string()).collect()
}

fn kebab_case(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len() + 4);
    for c in prop.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn join_selector(parent: &str, child: &str) -> String {
    if child.contains('&') {
        child.replace('&', parent)
    } else if child.starts_with(':') {
        format!("{parent}{child}")
    } else {
        format!("{parent} {child}")
    }
}

/// A selector and its styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub sx: Sx,
}

struct Block {
    selector: String,
    declarations: Vec<(String, String)>,
}

/// Ordered style rules rendered to CSS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule.
    pub fn rule(mut self, selector: &str, sx: Sx) -> Self {
        self.push(selector, sx);
        self
    }

    /// Add a rule in place.
    pub fn push(&mut self, selector: &str, sx: Sx) {
        self.rules.push(StyleRule {
            selector: selector.to_string(),
            sx,
        });
    }

    /// The rules in insertion order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Render to CSS text.
    pub fn to_css(&self, theme: &Theme) -> String {
        let mut layers: Vec<Vec<Block>> = (0..=theme.breakpoints.len()).map(|_| Vec::new()).collect();
        for rule in &self.rules {
            collect(theme, &rule.selector, &rule.sx, &mut layers);
        }

        let mut css = String::new();
        for (i, blocks) in layers.iter().enumerate() {
            if blocks.is_empty() {
                continue;
            }
            if i == 0 {
                write_blocks(&mut css, blocks, "");
            } else {
                let _ = writeln!(
                    css,
                    "@media screen and (min-width: {}) {{",
                    theme.breakpoints[i - 1]
                );
                write_blocks(&mut css, blocks, "  ");
                css.push_str("}\n");
            }
        }
        css
    }
}

fn collect(theme: &Theme, selector: &str, sx: &Sx, layers: &mut [Vec<Block>]) {
    let mut own: Vec<Vec<(String, String)>> = (0..layers.len()).map(|_| Vec::new()).collect();
    let mut nested = Vec::new();

    for entry in &sx.entries {
        match entry {
            SxEntry::Prop { name, value } => {
                for (step, v) in value.steps() {
                    match own.get_mut(step) {
                        Some(declarations) => declarations.extend(resolve(theme, name, v)),
                        None => tracing::debug!(
                            selector,
                            property = %name,
                            step,
                            "responsive step beyond the last breakpoint"
                        ),
                    }
                }
            }
            SxEntry::Nested { selector: child, sx } => {
                nested.push((join_selector(selector, child), sx));
            }
        }
    }

    for (layer, declarations) in layers.iter_mut().zip(own) {
        if !declarations.is_empty() {
            layer.push(Block {
                selector: selector.to_string(),
                declarations,
            });
        }
    }

    for (child, sx) in nested {
        collect(theme, &child, sx, layers);
    }
}

fn write_blocks(css: &mut String, blocks: &[Block], indent: &str) {
    for block in blocks {
        let _ = writeln!(css, "{indent}{} {{", block.selector);
        for (name, value) in &block.declarations {
            let _ = writeln!(css, "{indent}  {name}: {value};");
        }
        let _ = writeln!(css, "{indent}}}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarations(prop: &str, value: impl Into<StyleValue>) -> Vec<(String, String)> {
        resolve(&Theme::default(), prop, &value.into())
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_space_scale_and_aliases() {
        assert_eq!(declarations("ml", 4), vec![pair("margin-left", "24px")]);
        assert_eq!(
            declarations("mx", 3),
            vec![pair("margin-left", "16px"), pair("margin-right", "16px")]
        );
        assert_eq!(declarations("padding", 0), vec![pair("padding", "0")]);
    }

    #[test]
    fn test_negative_space() {
        assert_eq!(declarations("mt", -2), vec![pair("margin-top", "-8px")]);
    }

    #[test]
    fn test_out_of_scale_number_is_pixels() {
        assert_eq!(declarations("ml", 40), vec![pair("margin-left", "40px")]);
        assert_eq!(declarations("fontSize", 2.5), vec![pair("font-size", "2.5px")]);
    }

    #[test]
    fn test_unitless_properties() {
        assert_eq!(declarations("lineHeight", 1.5), vec![pair("line-height", "1.5")]);
        assert_eq!(declarations("zIndex", 10), vec![pair("z-index", "10")]);
    }

    #[test]
    fn test_border_width_scale() {
        assert_eq!(
            declarations("borderBottomWidth", 1),
            vec![pair("border-bottom-width", "1px")]
        );
        assert_eq!(declarations("borderRadius", 1), vec![pair("border-radius", "4px")]);
    }

    #[test]
    fn test_colors_resolve_by_key() {
        assert_eq!(
            declarations("bg", "secondaryDark"),
            vec![pair("background-color", "#191919")]
        );
        assert_eq!(declarations("color", "inherit"), vec![pair("color", "inherit")]);
        assert_eq!(
            declarations("borderColor", "grayMed"),
            vec![pair("border-color", "#d1d3d4")]
        );
    }

    #[test]
    fn test_text_passthrough_and_kebab_case() {
        assert_eq!(
            declarations("justifyContent", "space-between"),
            vec![pair("justify-content", "space-between")]
        );
        assert_eq!(declarations("pt", "6.25rem"), vec![pair("padding-top", "6.25rem")]);
    }

    #[test]
    fn test_steps_macro() {
        let value = steps![_, 3, "auto"];
        assert_eq!(
            value,
            Responsive::Steps(vec![
                None,
                Some(StyleValue::Number(3.0)),
                Some(StyleValue::Text("auto".to_string())),
            ])
        );
        assert_eq!(value.steps().len(), 2);
    }

    #[test]
    fn test_stylesheet_base_rule() {
        let css = Stylesheet::new()
            .rule(".box", Sx::new().prop("display", "flex").prop("p", 2))
            .to_css(&Theme::default());

        assert_eq!(css, ".box {\n  display: flex;\n  padding: 8px;\n}\n");
    }

    #[test]
    fn test_stylesheet_media_queries() {
        let css = Stylesheet::new()
            .rule(".brand", Sx::new().prop("display", steps!["none", "flex"]))
            .to_css(&Theme::default());

        assert!(css.starts_with(".brand {\n  display: none;\n}\n"));
        assert!(css.contains("@media screen and (min-width: 40em) {\n  .brand {\n    display: flex;\n  }\n}\n"));
        assert!(!css.contains("52em"));
    }

    #[test]
    fn test_stylesheet_skipped_step() {
        let css = Stylesheet::new()
            .rule(".logo", Sx::new().prop("height", steps![_, 3]))
            .to_css(&Theme::default());

        assert!(css.starts_with("@media screen and (min-width: 40em)"));
        assert!(css.contains("height: 24px;"));
    }

    #[test]
    fn test_nested_selectors() {
        let sx = Sx::new()
            .prop("color", "inherit")
            .nest(":hover", Sx::new().prop("color", "primarySafe"))
            .nest("::placeholder", Sx::new().prop("fontSize", 3))
            .nest("& > svg", Sx::new().prop("fill", "white"))
            .nest("span", Sx::new().prop("display", "block"));

        let css = Stylesheet::new().rule(".link", sx).to_css(&Theme::default());

        assert!(css.contains(".link:hover {\n  color: #3d59e0;\n}"));
        assert!(css.contains(".link::placeholder {\n  font-size: 18px;\n}"));
        assert!(css.contains(".link > svg {\n  fill: #ffffff;\n}"));
        assert!(css.contains(".link span {\n  display: block;\n}"));
    }

    #[test]
    fn test_later_properties_follow_earlier() {
        let css = Stylesheet::new()
            .rule(".title", Sx::new().prop("padding", 3).prop("pt", "6.25rem"))
            .to_css(&Theme::default());

        let padding = css.find("padding: 16px").expect("padding");
        let top = css.find("padding-top: 6.25rem").expect("padding-top");
        assert!(padding < top);
    }

    #[test]
    fn test_steps_beyond_breakpoints_are_dropped() {
        let mut theme = Theme::default();
        theme.breakpoints = vec!["40em".to_string()];

        let css = Stylesheet::new()
            .rule(".x", Sx::new().prop("width", steps!["100%", "50%", "25%"]))
            .to_css(&theme);

        assert!(css.contains("width: 50%"));
        assert!(!css.contains("25%"));
    }
}
