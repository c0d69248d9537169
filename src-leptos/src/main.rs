//! Daloy Dashboard - Leptos Frontend
//!
//! Entry point of the Trunk bundle. Mounts the routed shell from the library
//! half of the crate; everything testable lives there.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use daloy_types as _;
use leptos_meta as _;
use leptos_router as _;
use leptos_use as _;
use serde_json as _;
use wasm_bindgen as _;
use web_sys as _;

use daloy_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Daloy dashboard {} starting...", env!("GIT_VERSION"));

    mount_to_body(App);
}
