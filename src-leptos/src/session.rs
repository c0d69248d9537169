//! Browser-backed session helpers.
//!
//! The auth flag lives in `window.localStorage`; navigation goes through the
//! router. A failed logout still navigates; a failed login stays put and
//! returns the error.

use daloy_types::{AuthStore, Navigator, SessionError, SidebarConfig};
use leptos_router::NavigateOptions;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`AuthStore`] over `window.localStorage`, resolved on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAuthStore;

impl BrowserAuthStore {
    fn storage() -> Result<Storage, SessionError> {
        let window = web_sys::window().ok_or_else(|| SessionError::StorageUnavailable {
            reason: "No window".to_string(),
        })?;

        window
            .local_storage()
            .map_err(|e| SessionError::StorageUnavailable { reason: js_message(&e) })?
            .ok_or_else(|| SessionError::StorageUnavailable {
                reason: "localStorage is disabled".to_string(),
            })
    }
}

impl AuthStore for BrowserAuthStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| rejected("get", key, &e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| rejected("set", key, &e))
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| rejected("remove", key, &e))
    }
}

/// [`Navigator`] over the closure returned by `use_navigate`.
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&mut self, path: &str) {
        log::debug!("Navigating to {}", path);
        (self.0)(path, NavigateOptions::default());
    }
}

/// Whether the auth flag is present.
pub fn is_signed_in(config: &SidebarConfig) -> bool {
    daloy_types::is_authenticated(&BrowserAuthStore, config)
}

/// Set the auth flag and go to the dashboard.
///
/// Stays on the page when the flag cannot be stored; the error is meant to
/// be shown to the user.
pub fn sign_in<F>(navigate: F, config: &SidebarConfig) -> Result<(), SessionError>
where
    F: Fn(&str, NavigateOptions),
{
    daloy_types::login(&mut BrowserAuthStore, &mut RouterNavigator(navigate), config).inspect_err(
        |e| log::warn!("Failed to store auth flag: {}", e),
    )
}

/// Clear the auth flag and go to the login page.
pub fn sign_out<F>(navigate: F, config: &SidebarConfig)
where
    F: Fn(&str, NavigateOptions),
{
    match daloy_types::logout(&mut BrowserAuthStore, &mut RouterNavigator(navigate), config) {
        Ok(()) => log::info!("Logged out"),
        Err(e) => log::warn!("Logged out, but the auth flag could not be cleared: {}", e),
    }
}

fn rejected(operation: &str, key: &str, e: &JsValue) -> SessionError {
    SessionError::OperationFailed {
        operation: operation.to_string(),
        key: key.to_string(),
        message: js_message(e),
    }
}

fn js_message(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
