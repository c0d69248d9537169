//! Sidebar list row: icon, optional label, tooltip when collapsed

use crate::components::{Icon, Tooltip};
use daloy_types::models::{shows_labels, tooltip_for};
use daloy_types::NavIcon;
use leptos::prelude::*;

/// CSS classes of a row.
pub(crate) fn row_class(active: bool, collapsed: bool) -> String {
    let mut class = String::from("list-button");
    if active {
        class.push_str(" list-button--active");
    }
    if collapsed {
        class.push_str(" list-button--collapsed");
    }
    class
}

#[component]
pub fn ListButton(
    icon: NavIcon,
    label: &'static str,
    #[prop(into)] collapsed: Signal<bool>,
    #[prop(into, default = Signal::derive(|| false))] active: Signal<bool>,
    on_click: impl Fn() + Send + 'static,
) -> impl IntoView {
    let tooltip = Signal::derive(move || tooltip_for(collapsed.get(), label).map(str::to_string));

    view! {
        <li class="list-item">
            <Tooltip text=tooltip>
                <button
                    class=move || row_class(active.get(), collapsed.get())
                    aria-current=move || active.get().then_some("page")
                    aria-label=label
                    on:click=move |_| on_click()
                >
                    <span class="list-button-icon">
                        <Icon icon=icon />
                    </span>
                    <Show when=move || shows_labels(collapsed.get())>
                        <span class="list-button-label">{label}</span>
                    </Show>
                </button>
            </Tooltip>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class() {
        assert_eq!(row_class(false, false), "list-button");
        assert_eq!(row_class(true, false), "list-button list-button--active");
        assert_eq!(row_class(true, true), "list-button list-button--active list-button--collapsed");
    }
}
