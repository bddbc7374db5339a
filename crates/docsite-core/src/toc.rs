//! Table of contents data model.
//!
//! A [`Toc`] is the heading tree a content pipeline emits for one page. Only the
//! children of the first top-level heading are shown in the sidebar, see
//! [`Toc::first_level`].

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One heading in the table of contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
    /// Link target, usually `#anchor`.
    pub url: String,

    /// Heading text.
    pub title: String,

    /// Nested headings. Pipelines leave this out on leaf headings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Heading>>,
}

impl Heading {
    /// Create a leaf heading.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            items: None,
        }
    }

    /// Attach child headings.
    pub fn with_items(mut self, items: Vec<Heading>) -> Self {
        self.items = Some(items);
        self
    }

    /// Child headings, empty when absent.
    pub fn children(&self) -> &[Heading] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Depth of the subtree rooted at this heading (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Heading::depth).max().unwrap_or(0)
    }

    fn count(&self) -> usize {
        1 + self.children().iter().map(Heading::count).sum::<usize>()
    }
}

/// Root of a page's table of contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toc {
    /// Top-level headings.
    #[serde(default)]
    pub items: Vec<Heading>,
}

impl Toc {
    /// Create a table of contents from top-level headings.
    pub fn new(items: Vec<Heading>) -> Self {
        Self { items }
    }

    /// The entries the sidebar lists: the children of the first top-level heading.
    ///
    /// Returns `None` when there is no top-level heading or it carries no child
    /// list. A present but empty child list is `Some(&[])`.
    pub fn first_level(&self) -> Option<&[Heading]> {
        self.items.first()?.items.as_deref()
    }

    /// Total number of headings in the tree.
    pub fn len(&self) -> usize {
        self.items.iter().map(Heading::count).sum()
    }

    /// Whether the tree has no headings at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse the JSON shape emitted by the content pipeline.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table of contents from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| CoreError::toc(path, e.to_string()))
    }

    /// Build the nested tree from headings in document order.
    ///
    /// A heading nests under the closest preceding heading with a lower level.
    /// Skipped levels are tolerated, so an `h3` straight after an `h1` becomes
    /// its child.
    pub fn from_outline(outline: &[OutlineHeading]) -> Self {
        Self {
            items: nest(outline, &mut 0, 0),
        }
    }
}

fn nest(outline: &[OutlineHeading], pos: &mut usize, parent_level: u8) -> Vec<Heading> {
    let mut siblings = Vec::new();

    while let Some(entry) = outline.get(*pos) {
        let level = entry.level.max(1);
        if level <= parent_level {
            break;
        }
        *pos += 1;

        let children = nest(outline, pos, level);
        siblings.push(Heading {
            url: format!("#{}", entry.id),
            title: entry.text.clone(),
            items: (!children.is_empty()).then_some(children),
        });
    }

    siblings
}

/// A heading in document order, before nesting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutlineHeading {
    /// Heading level (1-6).
    pub level: u8,

    /// Heading text.
    pub text: String,

    /// Anchor ID.
    pub id: String,
}

impl OutlineHeading {
    /// Create a new outline heading.
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
        }
    }
}

/// Turn heading text into an anchor id.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Produces unique anchors for the headings of one page.
///
/// Repeats of the same slug get `-1`, `-2`, ... appended.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Create an empty slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, unique among the slugs handed out so far.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();

        while let Some(count) = self.seen.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        self.seen.insert(candidate.clone(), 0);

        candidate
    }
}
