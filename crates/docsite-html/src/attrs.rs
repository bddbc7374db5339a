//! HTML escaping and pass-through attributes.

use docsite_core::chrome::merge_classes;

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'))
}

/// Extra attributes a caller spreads onto a component's root element.
///
/// Order is preserved. A `class` attribute is merged with the component's own
/// class instead of replacing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether no attributes were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as ` class="own …" name="value"`, with a leading space.
    pub fn render_with_class(&self, own_class: &str) -> String {
        let class = merge_classes(own_class, self.get("class"));
        let mut out = format!(r#" class="{}""#, escape_html(&class));

        for (name, value) in &self.entries {
            if name == "class" {
                continue;
            }
            if !is_valid_name(name) {
                tracing::warn!(attribute = %name, "skipping attribute with an invalid name");
                continue;
            }
            out.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }

        out
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_own_class_only() {
        assert_eq!(Attributes::new().render_with_class("box"), r#" class="box""#);
    }

    #[test]
    fn test_class_is_merged() {
        let attrs = Attributes::new().with("id", "toc").with("class", "sticky");
        assert_eq!(
            attrs.render_with_class("box"),
            r#" class="box sticky" id="toc""#
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut attrs = Attributes::new().with("data-x", "1");
        attrs.insert("data-x", "2");
        assert_eq!(attrs.get("data-x"), Some("2"));
        assert_eq!(attrs.render_with_class("c"), r#" class="c" data-x="2""#);
    }

    #[test]
    fn test_invalid_names_are_skipped() {
        let attrs: Attributes = [("onload x", "evil"), ("aria-label", "Sections")]
            .into_iter()
            .collect();
        assert_eq!(
            attrs.render_with_class("c"),
            r#" class="c" aria-label="Sections""#
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let attrs = Attributes::new().with("title", "\"quoted\" <b>");
        assert!(
            attrs
                .render_with_class("c")
                .contains(r#"title="&quot;quoted&quot; &lt;b&gt;""#)
        );
    }
}
