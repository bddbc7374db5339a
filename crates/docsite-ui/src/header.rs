//! Header components: brand, top navigation, search input and menu toggle.
//!
//! [`Header`] takes no props. It reads [`Config`] and [`CurrentPath`] from
//! context, falling back to defaults, and provides [`SideNavState`] and
//! [`SearchQuery`] to the components below it.

use docsite_core::{Config, IconVariant, NavItem, classes};
use leptos::prelude::*;

use crate::icon::Icon;

/// Whether the side navigation is open on narrow screens.
#[derive(Debug, Clone, Copy)]
pub struct SideNavState(pub RwSignal<bool>);

impl SideNavState {
    /// Closed side navigation.
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    /// Whether the side navigation is open.
    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    /// Open or close the side navigation.
    pub fn toggle(&self) {
        self.0.update(|open| *open = !*open);
    }

    /// Close the side navigation.
    pub fn close(&self) {
        self.0.set(false);
    }
}

impl Default for SideNavState {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the page being shown, for highlighting navigation links.
#[derive(Debug, Clone, Copy)]
pub struct CurrentPath(pub Signal<String>);

/// Text typed into the header search input.
#[derive(Debug, Clone, Copy)]
pub struct SearchQuery(pub RwSignal<String>);

fn context_or_provide<T: Clone + Send + Sync + 'static>(init: impl FnOnce() -> T) -> T {
    use_context::<T>().unwrap_or_else(|| {
        let value = init();
        provide_context(value.clone());
        value
    })
}

/// Page header.
#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let current_path = use_context::<CurrentPath>()
        .map(|path| path.0)
        .unwrap_or_else(|| Signal::stored("/".to_string()));
    context_or_provide(SideNavState::new);
    let query = context_or_provide(|| SearchQuery(RwSignal::new(String::new())));

    let brand = config.brand;
    let search = config
        .search
        .enabled
        .then(|| view! { <SearchInput placeholder=config.search.placeholder query=query.0 /> });

    view! {
      <header class=classes::HEADER>
        <div class=classes::HEADER_GRID>
          <a href=brand.home_url class=classes::BRAND>
            <Icon name=brand.logo variant=IconVariant::Header class=classes::BRAND_LOGO />
            <span class=classes::BRAND_LABEL>{brand.label}</span>
          </a>
          <span class=classes::HEADER_NAV>
            <Icon name=brand.mark variant=IconVariant::Header class=classes::BRAND_MARK />
            <span class=classes::TOP_NAV_SLOT>
              <TopNav items=config.nav current_path=current_path />
            </span>
            {search}
            <span class=classes::HAMBURGER_SLOT>
              <Hamburger />
            </span>
          </span>
        </div>
      </header>
    }
}

/// Primary navigation links.
#[component]
pub fn TopNav(
    /// Navigation links.
    items: Vec<NavItem>,
    /// Current path for active highlighting.
    #[prop(into)]
    current_path: Signal<String>,
) -> impl IntoView {
    view! {
      <nav class=classes::TOP_NAV aria-label="Main navigation">
        <ul class=classes::TOP_NAV_LIST>
          {items
            .into_iter()
            .map(|item| {
              let url = item.url.clone();
              let is_active = Memo::new({
                let item = item.clone();
                move |_| item.is_active(&current_path.get())
              });
              view! {
                <li>
                  <a
                    href=url
                    class=classes::TOP_NAV_LINK
                    aria-current=move || { if is_active.get() { Some("page") } else { None } }
                  >
                    {item.label}
                  </a>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </nav>
    }
}

/// Search text input.
///
/// Pressing `/` anywhere on the page focuses the input, Escape clears it.
#[component]
pub fn SearchInput(
    /// Placeholder text for the input.
    #[prop(default = "Search".to_string())]
    placeholder: String,
    /// Signal to track the current query.
    query: RwSignal<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        use wasm_bindgen::{JsCast, prelude::*};

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                if ev.key() != "/" || ev.meta_key() || ev.ctrl_key() {
                    return;
                }
                if let Some(input) = input_ref.get_untracked() {
                    ev.prevent_default();
                    let _ = input.focus();
                }
            });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
        }

        // Leak the closure to keep it alive
        handler.forget();
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            query.set(String::new());
        }
    };

    view! {
      <div class=classes::SEARCH role="search">
        <Icon name="search" variant=IconVariant::Search />
        <input
          node_ref=input_ref
          type="text"
          class=classes::SEARCH_INPUT
          placeholder=placeholder.clone()
          aria-label=placeholder
          prop:value=move || query.get()
          on:input=move |ev| query.set(event_target_value(&ev))
          on:keydown=on_keydown
        />
      </div>
    }
}

/// Button toggling the side navigation on narrow screens.
#[component]
pub fn Hamburger() -> impl IntoView {
    let state = use_context::<SideNavState>().unwrap_or_default();

    view! {
      <button
        type="button"
        class=classes::HAMBURGER
        aria-label="Toggle navigation"
        aria-expanded=move || state.is_open().to_string()
        on:click=move |_| state.toggle()
      >
        <Icon name="menu" variant=IconVariant::Header />
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_nav_toggle() {
        let state = SideNavState::new();
        assert!(!state.is_open());

        state.toggle();
        assert!(state.is_open());

        state.toggle();
        assert!(!state.is_open());

        state.toggle();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_default_header_data() {
        let config = Config::default();
        assert_eq!(config.brand.label, "DOCS");
        assert!(config.search.enabled);
        assert!(!config.nav.is_empty());
    }
}
