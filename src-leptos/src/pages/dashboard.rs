//! Dashboard page

use crate::config::use_config;
use leptos::prelude::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    let brand = use_config().brand_name;

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Dashboard"</h1>
                <p class="page-subtitle">{format!("Welcome to {}", brand)}</p>
            </header>
            <section class="card">
                <p>"Use the sidebar to move between pages. Collapse it to icons with the chevron button."</p>
            </section>
        </div>
    }
}
