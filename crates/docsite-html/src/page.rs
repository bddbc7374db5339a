//! Standalone preview page combining the header and table of contents.

use std::path::{Path, PathBuf};

use docsite_core::{Config, Toc, chrome_css};
use tracing::{debug, info};

use crate::{
    Result,
    attrs::{Attributes, escape_html},
    header::render_header,
    template::{Template, TemplateContext},
    toc::{TocOptions, render_table_of_contents},
};

/// Layout of the preview page. The chrome stylesheet is inlined.
pub const PREVIEW_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <style>
body {
  margin: 0;
  display: grid;
  grid-template-columns: minmax(0, 1fr) 18rem;
  grid-template-areas: 'header header' 'main toc';
  min-height: 100vh;
}
main { grid-area: main; padding: 2rem; }
.docsite-toc { grid-area: toc; }
{{ css }}
    </style>
</head>
<body>
{{ header }}
<main>{{ content? }}</main>
{{ toc? }}
</body>
</html>
"#;

/// Rendered pieces of the chrome for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeParts {
    pub header: String,
    pub toc: Option<String>,
    pub css: String,
}

/// Render header, table of contents and stylesheet for `current_path`.
pub fn render_chrome(config: &Config, toc: &Toc, current_path: &str) -> ChromeParts {
    let options = TocOptions::with_title(config.toc.title.clone());
    let attrs = Attributes::new().with("aria-label", "Table of contents");

    ChromeParts {
        header: render_header(config, current_path),
        toc: render_table_of_contents(toc, &options, &attrs),
        css: chrome_css(&config.theme()),
    }
}

/// Render a complete HTML page around already rendered chrome parts.
pub fn render_preview_page(parts: &ChromeParts, title: &str, content: Option<&str>) -> Result<String> {
    debug!(title, has_toc = parts.toc.is_some(), "rendering preview page");

    let mut ctx = TemplateContext::new()
        .with_var("title", escape_html(title))
        .with_var("css", parts.css.as_str())
        .with_var("header", parts.header.as_str());

    if let Some(toc) = &parts.toc {
        ctx.insert("toc", toc.as_str());
    }
    if let Some(content) = content {
        ctx.insert("content", content);
    }

    Ok(Template::new(PREVIEW_TEMPLATE).render(&ctx)?)
}

/// Write the chrome parts and a preview page into `dir`.
///
/// Produces `header.html`, `chrome.css`, `index.html` and, when the table of
/// contents rendered, `toc.html`. Returns the written paths.
pub fn write_chrome(dir: &Path, parts: &ChromeParts, title: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut files = vec![
        (dir.join("header.html"), parts.header.clone()),
        (dir.join("chrome.css"), parts.css.clone()),
    ];
    if let Some(toc) = &parts.toc {
        files.push((dir.join("toc.html"), toc.clone()));
    }
    files.push((dir.join("index.html"), render_preview_page(parts, title, None)?));

    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        std::fs::write(&path, content)?;
        debug!(path = %path.display(), "wrote file");
        written.push(path);
    }

    info!(dir = %dir.display(), files = written.len(), "chrome written");
    Ok(written)
}
