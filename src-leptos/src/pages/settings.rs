//! Settings page: shows the active sidebar configuration

use crate::config::{use_config, CONFIG_ELEMENT_ID};
use leptos::prelude::*;

#[component]
pub fn Settings() -> impl IntoView {
    let config = use_config();

    let rows = vec![
        ("Brand", config.brand_name.clone()),
        ("Expanded width", format!("{}px", config.drawer_width)),
        ("Collapsed width", format!("{}px", config.collapsed_width)),
        ("Mobile breakpoint", format!("{}px", config.mobile_breakpoint)),
        ("Login route", config.login_path.clone()),
        ("Help page", config.help_url.clone().unwrap_or_else(|| "Not configured".to_string())),
    ];

    let raw = serde_json::to_string_pretty(&config).unwrap_or_else(|e| {
        log::warn!("Failed to serialize sidebar config: {}", e);
        String::new()
    });

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Settings"</h1>
                <p class="page-subtitle">
                    {format!("Override these values with a #{} script element.", CONFIG_ELEMENT_ID)}
                </p>
            </header>
            <section class="card">
                <dl class="settings-list">
                    {rows.into_iter().map(|(name, value)| view! {
                        <dt>{name}</dt>
                        <dd>{value}</dd>
                    }).collect_view()}
                </dl>
            </section>
            <section class="card">
                <pre class="config-json">{raw}</pre>
            </section>
        </div>
    }
}
