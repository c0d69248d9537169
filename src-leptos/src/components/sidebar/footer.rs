//! Account actions: help and logout

use crate::components::ListButton;
use crate::config::use_config;
use crate::session::sign_out;
use daloy_types::FooterAction;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Open the help page in a new tab; inert without a configured URL.
fn open_help(help_url: Option<&str>) {
    let Some(url) = help_url else {
        return;
    };
    let opened = web_sys::window().map(|window| window.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(_))) {
        log::warn!("Could not open help page {}", url);
    }
}

#[component]
pub(super) fn SidebarFooter(collapsed: Signal<bool>) -> impl IntoView {
    let config = use_config();
    let navigate = use_navigate();

    view! {
        <ul class="list">
            {FooterAction::ALL.into_iter().map(|action| {
                let navigate = navigate.clone();
                let config = config.clone();
                let on_click = move || match action {
                    FooterAction::Help => open_help(config.help_url.as_deref()),
                    FooterAction::Logout => sign_out(navigate.clone(), &config),
                };

                view! {
                    <ListButton
                        icon=action.icon()
                        label=action.label()
                        collapsed=collapsed
                        on_click=on_click
                    />
                }
            }).collect_view()}
        </ul>
    }
}
