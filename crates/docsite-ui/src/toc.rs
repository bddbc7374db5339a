//! Table of contents sidebar component.

use docsite_core::{DEFAULT_TOC_TITLE, EMPTY_TOC_WARNING, Heading, Toc, classes};
use leptos::{logging::warn, prelude::*};

/// Entries to list for `toc`, or `None` after warning when there are none.
pub fn sidebar_entries(toc: &Toc) -> Option<Vec<Heading>> {
    let entries = toc.first_level().map(<[Heading]>::to_vec);
    if entries.is_none() {
        warn!("{EMPTY_TOC_WARNING}");
    }
    entries
}

/// Table of contents listing the first level of the page's headings.
///
/// Renders nothing when the first top-level heading has no child list.
/// Attributes spread onto the component (`<TableOfContents toc {..} id="toc" />`)
/// land on the root container.
#[component]
pub fn TableOfContents(
    /// Heading tree for the current page.
    #[prop(into)]
    toc: Signal<Toc>,
    /// Heading above the entries.
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| DEFAULT_TOC_TITLE.to_string());

    move || {
        let entries = toc.with(sidebar_entries)?;

        Some(view! {
          <div class=classes::TOC>
            <h5 class=classes::TOC_TITLE>{title.clone()}</h5>
            <ul class=classes::TOC_LIST>
              {entries
                .into_iter()
                .map(|heading| {
                  view! {
                    <li class=classes::TOC_ITEM>
                      <a href=heading.url class=classes::TOC_LINK>
                        {heading.title}
                      </a>
                    </li>
                  }
                })
                .collect_view()}
            </ul>
          </div>
        })
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn test_sidebar_entries_two_children() {
        let toc = Toc::new(vec![Heading::new("#page", "Page").with_items(vec![
            Heading::new("#one", "One"),
            Heading::new("#two", "Two"),
        ])]);

        let entries = sidebar_entries(&toc).expect("entries");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "#one");
        assert_eq!(entries[1].title, "Two");
    }

    #[test]
    fn test_sidebar_entries_missing_children() {
        let toc = Toc::new(vec![Heading::new("#page", "Page")]);
        assert!(sidebar_entries(&toc).is_none());
        assert!(sidebar_entries(&Toc::default()).is_none());
    }

    fn render_html(toc: Toc) -> String {
        let title = "Contents".to_string();
        Owner::new().with(|| {
            view! {
              <TableOfContents toc=toc title=title.clone() {..} id="toc" aria-label="Table of contents" />
            }
            .to_html()
        })
    }

    #[test]
    fn test_component_lists_first_level() {
        let toc = Toc::new(vec![Heading::new("#page", "Page").with_items(vec![
            Heading::new("#one", "One"),
            Heading::new("#two", "Two").with_items(vec![Heading::new("#deep", "Deep")]),
        ])]);
        let html = render_html(toc);

        assert_eq!(html.matches(r#"class="docsite-toc-link""#).count(), 2);
        assert!(html.contains(r##"href="#one""##));
        assert!(html.contains(r##"href="#two""##));
        assert!(!html.contains("Deep"));
        assert!(html.contains(">Contents</h5>"));
    }

    #[test]
    fn test_component_spreads_attributes_on_root() {
        let toc = Toc::new(vec![
            Heading::new("#page", "Page").with_items(vec![Heading::new("#one", "One")]),
        ]);
        let html = render_html(toc);

        let root = html.find("<div").expect("root container");
        let root_tag = &html[root..root + html[root..].find('>').expect("tag end")];
        assert!(root_tag.contains(r#"class="docsite-toc""#));
        assert!(root_tag.contains(r#"id="toc""#));
        assert!(root_tag.contains(r#"aria-label="Table of contents""#));
    }

    #[test]
    fn test_component_missing_children_renders_nothing() {
        let html = render_html(Toc::new(vec![Heading::new("#page", "Page")]));

        assert!(!html.contains("docsite-toc"));
        assert!(!html.contains("<ul"));
    }
}
