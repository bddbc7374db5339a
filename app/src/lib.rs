use docsite_core::{Config, OutlineHeading, Slugger, Toc, chrome_css};
use docsite_ui::{CurrentPath, Header, TableOfContents};
use leptos::prelude::*;
use leptos_meta::{Style, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

const LAYOUT_CSS: &str = "
.docsite-page {
  display: grid;
  grid-template-columns: minmax(0, 1fr) 18rem;
  grid-template-areas: 'header header' 'main toc';
  min-height: 100vh;
}
.docsite-page > main { grid-area: main; padding: 2rem; }
.docsite-page > .docsite-toc { grid-area: toc; }
";

/// Application shell: header on top, page content, table of contents on the side.
#[component]
pub fn App(
    /// Chrome configuration, defaults when absent.
    #[prop(optional)]
    config: Option<Config>,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = config.unwrap_or_default();
    let css = format!("{LAYOUT_CSS}{}", chrome_css(&config.theme()));
    provide_context(config);

    view! {
      <Title text="Documentation" />
      <Style>{css}</Style>

      <Router>
        <Routes fallback=|| "Page not found.".into_view()>
          <Route path=StaticSegment("") view=GuidePage />
          <Route path=StaticSegment("integrations") view=IntegrationsPage />
        </Routes>
      </Router>
    }
}

/// Grid layout shared by every page. Must be rendered inside the router.
#[component]
fn DocsLayout(toc: Toc, children: Children) -> impl IntoView {
    let location = use_location();
    provide_context(CurrentPath(Signal::derive(move || location.pathname.get())));

    let title = use_context::<Config>().unwrap_or_default().toc.title;

    view! {
      <div class="docsite-page">
        <Header />
        <main>{children()}</main>
        <TableOfContents toc=toc title=title.clone() {..} aria-label="Table of contents" />
      </div>
    }
}

fn outline_toc(headings: &[(u8, &str)]) -> Toc {
    let mut slugger = Slugger::new();
    let outline: Vec<OutlineHeading> = headings
        .iter()
        .map(|(level, text)| OutlineHeading::new(*level, *text, slugger.slug(text)))
        .collect();
    Toc::from_outline(&outline)
}

/// A guide page whose headings fill the table of contents.
#[component]
fn GuidePage() -> impl IntoView {
    let toc = outline_toc(&[
        (1, "Feature flags"),
        (2, "Creating flags"),
        (2, "Targeting users"),
        (3, "Percentage rollouts"),
        (2, "Archiving flags"),
    ]);

    view! {
      <DocsLayout toc=toc>
        <h1 id="feature-flags">"Feature flags"</h1>
        <h2 id="creating-flags">"Creating flags"</h2>
        <p>"Flags are created per project and environment."</p>
        <h2 id="targeting-users">"Targeting users"</h2>
        <h3 id="percentage-rollouts">"Percentage rollouts"</h3>
        <p>"Roll a variation out to a share of users."</p>
        <h2 id="archiving-flags">"Archiving flags"</h2>
        <p>"Archived flags stop being evaluated."</p>
      </DocsLayout>
    }
}

/// A page with a single heading: the table of contents renders nothing.
#[component]
fn IntegrationsPage() -> impl IntoView {
    let toc = outline_toc(&[(1, "Integrations")]);

    view! {
      <DocsLayout toc=toc>
        <h1 id="integrations">"Integrations"</h1>
        <p>"Connect your tools."</p>
      </DocsLayout>
    }
}
