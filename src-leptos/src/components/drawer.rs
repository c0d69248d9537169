//! Drawer primitive: temporary overlay or permanent side panel

use daloy_types::DrawerVariant;
use leptos::prelude::*;

/// CSS classes of the drawer root.
pub(crate) fn drawer_class(variant: DrawerVariant, open: bool, hidden: bool) -> String {
    let mut class = format!("drawer {}", variant.class());
    if open {
        class.push_str(" drawer--open");
    }
    if hidden {
        class.push_str(" drawer--hidden");
    }
    class
}

/// Inline style of the drawer paper.
pub(crate) fn paper_style(width: u32) -> String {
    format!("width: {}px;", width)
}

#[component]
pub fn Drawer(
    variant: DrawerVariant,
    /// Ignored by permanent drawers, which are always open
    #[prop(into)]
    open: Signal<bool>,
    /// Hides the whole drawer (viewport does not use this variant)
    #[prop(into)]
    hidden: Signal<bool>,
    #[prop(into)] paper_width: Signal<u32>,
    /// Backdrop click handler (temporary drawers)
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let is_open = move || variant == DrawerVariant::Permanent || open.get();

    // Temporary drawers stay mounted while closed; only visibility changes.
    view! {
        <div class=move || drawer_class(variant, is_open(), hidden.get())>
            {(variant == DrawerVariant::Temporary).then(|| view! {
                <div
                    class="drawer-backdrop"
                    on:click=move |_| {
                        if let Some(cb) = on_close {
                            cb.run(());
                        }
                    }
                ></div>
            })}
            <div class="drawer-paper" style=move || paper_style(paper_width.get())>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_class() {
        assert_eq!(
            drawer_class(DrawerVariant::Temporary, false, false),
            "drawer drawer--temporary"
        );
        assert_eq!(
            drawer_class(DrawerVariant::Permanent, true, true),
            "drawer drawer--permanent drawer--open drawer--hidden"
        );
    }

    #[test]
    fn test_paper_style() {
        assert_eq!(paper_style(72), "width: 72px;");
    }
}
