//! Primary navigation list

use crate::components::ListButton;
use crate::session::RouterNavigator;
use daloy_types::{Navigator, MENU_ITEMS};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub(super) fn NavList(collapsed: Signal<bool>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    view! {
        <ul class="list">
            {MENU_ITEMS.iter().map(|entry| {
                let current_path = location.pathname;
                let is_active = Signal::derive(move || entry.is_active(&current_path.get()));
                let navigate = navigate.clone();

                view! {
                    <ListButton
                        icon=entry.icon
                        label=entry.label
                        collapsed=collapsed
                        active=is_active
                        on_click=move || RouterNavigator(navigate.clone()).navigate(entry.path)
                    />
                }
            }).collect_view()}
        </ul>
    }
}
