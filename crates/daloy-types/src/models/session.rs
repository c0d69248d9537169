//! Authentication flag handling and the logout flow.

use crate::error::SessionError;
use crate::models::SidebarConfig;

/// Value stored under the auth flag key while signed in.
const AUTHENTICATED: &str = "true";

/// Route opened after a successful login.
pub const HOME_PATH: &str = "/";

/// Key/value storage holding the client-side authentication flag.
pub trait AuthStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// Client-side router.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Clear the auth flag and go to the login page.
///
/// Navigation happens exactly once per call, whether or not the store
/// accepted the removal; a store failure is returned for the caller to log.
pub fn logout<S, N>(store: &mut S, navigator: &mut N, config: &SidebarConfig) -> Result<(), SessionError>
where
    S: AuthStore + ?Sized,
    N: Navigator + ?Sized,
{
    let removed = store.remove(&config.auth_flag_key);
    navigator.navigate(&config.login_path);
    removed
}

/// Set the auth flag and go to the dashboard.
///
/// Navigates only when the flag was stored: otherwise the route guard would
/// bounce straight back to the login page. The error is for display.
pub fn login<S, N>(store: &mut S, navigator: &mut N, config: &SidebarConfig) -> Result<(), SessionError>
where
    S: AuthStore + ?Sized,
    N: Navigator + ?Sized,
{
    mark_authenticated(store, config)?;
    navigator.navigate(HOME_PATH);
    Ok(())
}

/// Whether the auth flag is set. Unreadable storage counts as signed out.
pub fn is_authenticated<S: AuthStore + ?Sized>(store: &S, config: &SidebarConfig) -> bool {
    matches!(store.get(&config.auth_flag_key), Ok(Some(value)) if value == AUTHENTICATED)
}

/// Set the auth flag.
pub fn mark_authenticated<S: AuthStore + ?Sized>(
    store: &mut S,
    config: &SidebarConfig,
) -> Result<(), SessionError> {
    store.set(&config.auth_flag_key, AUTHENTICATED)
}
