//! Sidebar configuration loading.
//!
//! `index.html` may embed a JSON override:
//!
//! ```html
//! <script id="daloy-config" type="application/json">{"drawer_width": 260}</script>
//! ```
//!
//! Missing fields keep their defaults. An invalid document is logged and
//! ignored.

use daloy_types::SidebarConfig;
use leptos::prelude::*;

/// Id of the `<script>` element carrying the override.
pub const CONFIG_ELEMENT_ID: &str = "daloy-config";

/// Read the embedded override, falling back to defaults.
pub fn load() -> SidebarConfig {
    let Some(raw) = embedded_json() else {
        log::debug!("No #{} element, using default sidebar config", CONFIG_ELEMENT_ID);
        return SidebarConfig::default();
    };

    parse_or_default(&raw)
}

/// Parse an override document; blank or invalid input yields defaults.
pub fn parse_or_default(raw: &str) -> SidebarConfig {
    if raw.trim().is_empty() {
        return SidebarConfig::default();
    }

    match SidebarConfig::from_json(raw) {
        Ok(config) => {
            log::info!("Loaded sidebar config override (drawer_width={})", config.drawer_width);
            config
        },
        Err(e) => {
            log::warn!("Ignoring invalid sidebar config: {}", e);
            SidebarConfig::default()
        },
    }
}

fn embedded_json() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Config provided by [`App`](crate::app::App).
pub fn use_config() -> SidebarConfig {
    use_context::<SidebarConfig>().unwrap_or_default()
}
