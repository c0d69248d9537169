//! Tooltip component
//!
//! Uses the native `title` tooltip so it is not clipped by the drawer
//! paper's hidden overflow. No text means no tooltip.

use leptos::prelude::*;

#[component]
pub fn Tooltip(
    /// Text to show on hover, `None` disables the tooltip
    #[prop(into)]
    text: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="tooltip" title=move || text.get()>
            {children()}
        </div>
    }
}
