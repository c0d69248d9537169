//! # Daloy Types
//!
//! Core types and behavior behind the Daloy dashboard sidebar, kept free of
//! any browser dependency so it can be exercised on the host.
//!
//! - **`error`** - Typed error hierarchy for configuration and session storage
//! - **`models`** - Navigation entries, drawer geometry, collapse state,
//!   the logout flow and the sidebar configuration
//!
//! ## Architecture Role
//!
//! ```text
//!        daloy-types (this crate)
//!               │
//!               ▼
//!         daloy-leptos (WASM frontend)
//! ```
//!
//! Browser collaborators (local storage, the router) enter through the
//! [`AuthStore`] and [`Navigator`] traits.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, Result, SessionError, TypedError};

// Re-export core model types
pub use models::{
    active_entry, apply_toggle, is_authenticated, login, logout, mark_authenticated, AuthStore,
    CollapseState, DrawerGeometry, DrawerVariant, FooterAction, NavEntry, NavIcon, Navigator,
    SidebarConfig, Viewport, COLLAPSED_WIDTH, HOME_PATH, LOGIN_ROUTE, MENU_ITEMS,
};
