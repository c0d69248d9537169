//! Collapsible navigation sidebar
//!
//! Mobile viewports get a temporary overlay drawer opened by the host;
//! desktop viewports get a permanent drawer that collapses to icons.
//! Both drawers render the same contents.

mod footer;
mod header;
mod nav_list;

use crate::components::{Drawer, Icon};
use crate::config::use_config;
use daloy_types::models::shows_expand_button;
use daloy_types::{apply_toggle, CollapseState, DrawerGeometry, DrawerVariant, NavIcon, Viewport};
use footer::SidebarFooter;
use header::SidebarHeader;
use leptos::prelude::*;
use leptos_use::use_media_query;
use nav_list::NavList;

/// Inline style of the `nav` landmark: only desktop viewports reserve width.
pub(crate) fn nav_style(viewport: Viewport, width: u32) -> String {
    match viewport {
        Viewport::Desktop => format!("width: {}px; flex-shrink: 0;", width),
        Viewport::Mobile => String::new(),
    }
}

/// Drawers not used by the current viewport stay mounted but hidden.
pub(crate) fn drawer_hidden(variant: DrawerVariant, viewport: Viewport) -> bool {
    viewport.drawer_variant() != variant
}

/// Report the collapse state held by `collapse` (mount).
fn announce_collapse(collapse: RwSignal<CollapseState>, report: impl FnMut(bool)) {
    collapse.get_untracked().announce(report);
}

/// Flip the collapse state held by `collapse`, then report the new value.
fn toggle_collapse(collapse: RwSignal<CollapseState>, report: impl FnMut(bool)) -> bool {
    let collapsed = apply_toggle(|| collapse.get_untracked(), |state| collapse.set(state), report);
    log::debug!("Sidebar collapsed: {}", collapsed);
    collapsed
}

#[component]
pub fn Sidebar(
    /// Expanded width in pixels
    drawer_width: u32,
    /// Whether the mobile drawer is open
    #[prop(into)]
    mobile_open: Signal<bool>,
    /// Closes the mobile drawer
    #[prop(into)]
    on_drawer_toggle: Callback<()>,
    /// Receives the collapsed flag on mount and after every toggle
    #[prop(optional, into)]
    on_collapse_change: Option<Callback<bool>>,
) -> impl IntoView {
    let config = use_config();
    let geometry =
        DrawerGeometry { expanded_width: drawer_width, collapsed_width: config.collapsed_width };

    let is_mobile = use_media_query(config.mobile_media_query());
    let viewport = Signal::derive(move || Viewport::from_is_mobile(is_mobile.get()));

    let collapse = RwSignal::new(CollapseState::default());
    let collapsed = Signal::derive(move || collapse.get().is_collapsed());

    let report = move |value: bool| {
        if let Some(cb) = on_collapse_change {
            cb.run(value);
        }
    };

    // Initial value, once on mount
    Effect::new(move |_| announce_collapse(collapse, report));

    let on_toggle = Callback::new(move |()| {
        toggle_collapse(collapse, report);
    });

    let current_width =
        Signal::derive(move || geometry.current_width(collapsed.get(), viewport.get()));

    view! {
        <nav
            class="sidebar"
            style=move || nav_style(viewport.get(), current_width.get())
            aria-label="Main navigation"
        >
            <Drawer
                variant=DrawerVariant::Temporary
                open=mobile_open
                hidden=Signal::derive(move || drawer_hidden(DrawerVariant::Temporary, viewport.get()))
                paper_width=Signal::derive(move || {
                    geometry.paper_width(DrawerVariant::Temporary, collapsed.get(), viewport.get())
                })
                on_close=on_drawer_toggle
            >
                <SidebarContents collapsed=collapsed viewport=viewport on_toggle=on_toggle />
            </Drawer>

            <Drawer
                variant=DrawerVariant::Permanent
                open=true
                hidden=Signal::derive(move || drawer_hidden(DrawerVariant::Permanent, viewport.get()))
                paper_width=current_width
            >
                <SidebarContents collapsed=collapsed viewport=viewport on_toggle=on_toggle />
            </Drawer>
        </nav>
    }
}

/// Header, primary navigation and footer actions.
#[component]
fn SidebarContents(
    collapsed: Signal<bool>,
    viewport: Signal<Viewport>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="sidebar-contents">
            <SidebarHeader collapsed=collapsed on_toggle=on_toggle />

            <Show when=move || shows_expand_button(collapsed.get(), viewport.get())>
                <div class="sidebar-expand">
                    <button
                        class="icon-button icon-button--accent icon-button--small"
                        aria-label="Expand sidebar"
                        on:click=move |_| on_toggle.run(())
                    >
                        <Icon icon=NavIcon::ChevronRight />
                    </button>
                </div>
            </Show>

            <hr class="divider" />
            <div class="sidebar-scroll">
                <NavList collapsed=collapsed />
            </div>
            <hr class="divider" />
            <SidebarFooter collapsed=collapsed />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_style() {
        assert_eq!(nav_style(Viewport::Desktop, 72), "width: 72px; flex-shrink: 0;");
        assert_eq!(nav_style(Viewport::Mobile, 240), "");
    }

    #[test]
    fn test_drawer_hidden_follows_viewport() {
        assert!(!drawer_hidden(DrawerVariant::Temporary, Viewport::Mobile));
        assert!(drawer_hidden(DrawerVariant::Permanent, Viewport::Mobile));
        assert!(drawer_hidden(DrawerVariant::Temporary, Viewport::Desktop));
        assert!(!drawer_hidden(DrawerVariant::Permanent, Viewport::Desktop));
    }

    #[test]
    fn test_collapse_handlers_report_mount_and_each_toggle() {
        let owner = Owner::new();
        owner.with(|| {
            let collapse = RwSignal::new(CollapseState::default());
            let mut reported = Vec::new();

            announce_collapse(collapse, |c| reported.push(c));
            assert!(!toggle_collapse(collapse, |c| reported.push(c)));
            assert!(toggle_collapse(collapse, |c| reported.push(c)));

            assert_eq!(reported, vec![true, false, true]);
            assert!(collapse.get_untracked().is_collapsed());
        });
    }

    #[test]
    fn test_toggle_is_stored_before_report() {
        let owner = Owner::new();
        owner.with(|| {
            let collapse = RwSignal::new(CollapseState::default());
            let mut stored = None;

            toggle_collapse(collapse, |_| stored = Some(collapse.get_untracked().is_collapsed()));

            assert_eq!(stored, Some(false));
        });
    }
}
