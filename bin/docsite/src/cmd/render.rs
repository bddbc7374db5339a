//! Render command - writes header, table of contents and stylesheet

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use docsite_core::Toc;
use docsite_html::{render_chrome, write_chrome};

use crate::load_config;

/// Run the render command.
///
/// Renders the chrome for the page at `current_path` into `output`.
pub fn run(config_path: &Path, toc_path: &Path, output: &Path, current_path: &str) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?toc_path, ?output, current_path, "Rendering chrome");

    let config = load_config(config_path)?;
    let toc = Toc::load(toc_path)
        .wrap_err_with(|| format!("Failed to load table of contents: {}", toc_path.display()))?;
    tracing::debug!(headings = toc.len(), "Loaded table of contents");

    let parts = render_chrome(&config, &toc, current_path);
    let title = toc
        .items
        .first()
        .map_or_else(|| config.brand.label.clone(), |heading| heading.title.clone());
    let written = write_chrome(output, &parts, &title).wrap_err("Failed to write output")?;

    let duration = start.elapsed();

    println!();
    println!("  Render completed successfully!");
    println!();
    for path in &written {
        println!("  {}", path.display());
    }
    if parts.toc.is_none() {
        println!();
        println!("  ⚠ No table of contents entries, toc.html was not written");
    }
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!();

    tracing::info!(files = written.len(), ?duration, "Render completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOC_JSON: &str = r##"{
        "items": [{
            "url": "#sdks",
            "title": "SDKs",
            "items": [
                { "url": "#client-side", "title": "Client-side" },
                { "url": "#server-side", "title": "Server-side" }
            ]
        }]
    }"##;

    #[test]
    fn test_render_writes_all_parts() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let toc_path = dir.path().join("toc.json");
        std::fs::write(&toc_path, TOC_JSON).expect("write toc");
        let output = dir.path().join("public");

        run(&dir.path().join("docsite.toml"), &toc_path, &output, "/sdk").expect("render");

        let toc_html = std::fs::read_to_string(output.join("toc.html")).expect("toc.html");
        assert_eq!(toc_html.matches("<li ").count(), 2);

        let index = std::fs::read_to_string(output.join("index.html")).expect("index.html");
        assert!(index.contains("<title>SDKs</title>"));
        assert!(index.contains(r#"aria-current="page">SDKs</a>"#));
        assert!(output.join("chrome.css").exists());
    }

    #[test]
    fn test_render_without_children_skips_toc() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let toc_path = dir.path().join("toc.json");
        std::fs::write(&toc_path, r##"{"items":[{"url":"#a","title":"A"}]}"##).expect("write toc");
        let output = dir.path().join("public");

        run(&dir.path().join("docsite.toml"), &toc_path, &output, "/").expect("render");

        assert!(output.join("header.html").exists());
        assert!(!output.join("toc.html").exists());
    }

    #[test]
    fn test_render_missing_toc_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = run(
            &dir.path().join("docsite.toml"),
            &dir.path().join("missing.json"),
            &dir.path().join("public"),
            "/",
        );
        assert!(result.is_err());
    }
}
