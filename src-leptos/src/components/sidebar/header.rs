//! Brand header with the collapse control

use crate::components::Icon;
use crate::config::use_config;
use daloy_types::NavIcon;
use leptos::prelude::*;

const VERSION: &str = env!("GIT_VERSION");

/// `v`-prefixed label; tags that already carry the prefix keep a single one.
pub(crate) fn version_label(version: &str) -> String {
    format!("v{}", version.strip_prefix('v').unwrap_or(version))
}

#[component]
pub(super) fn SidebarHeader(collapsed: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let brand = use_config().brand_name;

    view! {
        <div class=move || {
            if collapsed.get() { "sidebar-header sidebar-header--collapsed" } else { "sidebar-header" }
        }>
            <Show
                when=move || collapsed.get()
                fallback=move || {
                    let brand = brand.clone();
                    view! {
                        <div class="logo">
                            <span class="logo-text">{brand}</span>
                            <span class="version">{version_label(VERSION)}</span>
                        </div>
                        <button
                            class="icon-button"
                            aria-label="Collapse sidebar"
                            on:click=move |_| on_toggle.run(())
                        >
                            <Icon icon=NavIcon::ChevronLeft />
                        </button>
                    }
                }
            >
                <div class="logo-tile">
                    <Icon icon=NavIcon::Traffic />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        assert_eq!(version_label("0.1.0"), "v0.1.0");
        assert_eq!(version_label("v1.2.0-3-gabc1234-dirty"), "v1.2.0-3-gabc1234-dirty");
        assert_eq!(version_label("abc1234"), "vabc1234");
        assert!(!VERSION.is_empty());
    }
}
