//! Main App component with routing

use crate::components::{Icon, Sidebar};
use crate::config::use_config;
use crate::pages::{Dashboard, Login, Settings};
use crate::session::{is_signed_in, RouterNavigator};
use daloy_types::{active_entry, NavIcon, Navigator, Viewport};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;
use leptos_use::use_media_query;

/// Inline style of the main content area next to the sidebar.
pub(crate) fn content_style(viewport: Viewport, sidebar_width: u32) -> String {
    match viewport {
        Viewport::Desktop => format!("width: calc(100% - {}px);", sidebar_width),
        Viewport::Mobile => "width: 100%;".to_string(),
    }
}

/// The mobile drawer closes whenever the login page is shown.
pub(crate) fn mobile_open_for_route(on_login_page: bool, open: bool) -> bool {
    open && !on_login_page
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::config::load();
    let title = config.brand_name.clone();
    provide_context(config);

    view! {
        <Title text=title />
        <Router>
            <Shell />
        </Router>
    }
}

/// Sidebar, mobile top bar and routed content.
#[component]
fn Shell() -> impl IntoView {
    let config = use_config();
    let geometry = config.geometry();
    let pathname = use_location().pathname;

    let mobile_open = RwSignal::new(false);
    let sidebar_collapsed = RwSignal::new(true);
    let is_mobile = use_media_query(config.mobile_media_query());
    let viewport = Signal::derive(move || Viewport::from_is_mobile(is_mobile.get()));

    // Route guard: everything but the login page needs the auth flag.
    let login_path = config.login_path.clone();
    let navigate = use_navigate();
    let guard_config = config.clone();
    Effect::new(move |_| {
        let path = pathname.get();
        if path != login_path && !is_signed_in(&guard_config) {
            log::info!("Not signed in, redirecting {} to {}", path, login_path);
            RouterNavigator(navigate.clone()).navigate(&login_path);
        }
    });

    let login_path = config.login_path.clone();
    let on_login_page = Memo::new(move |_| pathname.get() == login_path);

    let toggle_mobile = move || mobile_open.update(|open| *open = !*open);

    Effect::new(move |_| {
        let on_login = on_login_page.get();
        let open = mobile_open.get_untracked();
        if mobile_open_for_route(on_login, open) != open {
            mobile_open.set(false);
        }
    });

    let brand = config.brand_name.clone();
    let top_bar_title = Signal::derive(move || {
        active_entry(&pathname.get()).map_or_else(|| brand.clone(), |entry| entry.label.to_string())
    });

    view! {
        <div class="app-container">
            <Show when=move || !on_login_page.get()>
                <header class=move || {
                    if viewport.get().is_mobile() { "top-bar top-bar--visible" } else { "top-bar" }
                }>
                    <button
                        class="icon-button"
                        aria-label="Open navigation"
                        aria-expanded=move || mobile_open.get().to_string()
                        on:click=move |_| toggle_mobile()
                    >
                        <Icon icon=NavIcon::Menu />
                    </button>
                    <span class="top-bar-title">{move || top_bar_title.get()}</span>
                </header>
                <Sidebar
                    drawer_width=geometry.expanded_width
                    mobile_open=mobile_open
                    on_drawer_toggle=move || toggle_mobile()
                    on_collapse_change=Callback::new(move |collapsed: bool| sidebar_collapsed.set(collapsed))
                />
            </Show>
            <main
                class="main-content"
                style=move || {
                    if on_login_page.get() {
                        String::new()
                    } else {
                        let width = geometry.current_width(sidebar_collapsed.get(), viewport.get());
                        content_style(viewport.get(), width)
                    }
                }
            >
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/settings") view=Settings />
                    <Route path=path!("/login") view=Login />
                </Routes>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_style() {
        assert_eq!(content_style(Viewport::Desktop, 72), "width: calc(100% - 72px);");
        assert_eq!(content_style(Viewport::Mobile, 240), "width: 100%;");
    }

    #[test]
    fn test_mobile_drawer_closes_on_login_page() {
        assert!(!mobile_open_for_route(true, true));
        assert!(!mobile_open_for_route(true, false));
        assert!(mobile_open_for_route(false, true));
        assert!(!mobile_open_for_route(false, false));
    }
}
