//! Login page

use crate::config::use_config;
use crate::session::{is_signed_in, sign_in, RouterNavigator};
use daloy_types::{Navigator, SessionError, HOME_PATH};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Text shown when the auth flag could not be stored.
pub(crate) fn sign_in_error_message(error: &SessionError) -> String {
    match error {
        SessionError::StorageUnavailable { .. } => {
            "Sign in needs browser storage. Enable site data (local storage) and try again."
                .to_string()
        },
        SessionError::OperationFailed { message, .. } => {
            format!("Could not save your session: {}", message)
        },
    }
}

#[component]
pub fn Login() -> impl IntoView {
    let config = use_config();
    let navigate = use_navigate();

    let nav_for_check = navigate.clone();
    let check_config = config.clone();
    Effect::new(move |_| {
        if is_signed_in(&check_config) {
            RouterNavigator(nav_for_check.clone()).navigate(HOME_PATH);
        }
    });

    let error = RwSignal::new(Option::<String>::None);
    let on_sign_in = move |_| match sign_in(navigate.clone(), &config) {
        Ok(()) => error.set(None),
        Err(e) => error.set(Some(sign_in_error_message(&e))),
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <h1>{use_config().brand_name}</h1>
                    <p class="login-subtitle">"Sign in to continue"</p>
                </div>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <button class="btn btn--primary btn--full-width" on:click=on_sign_in>
                    "Sign in"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_error_message() {
        let unavailable =
            SessionError::StorageUnavailable { reason: "localStorage is disabled".to_string() };
        assert!(sign_in_error_message(&unavailable).contains("local storage"));

        let rejected = SessionError::OperationFailed {
            operation: "set".to_string(),
            key: "isAuthenticated".to_string(),
            message: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            sign_in_error_message(&rejected),
            "Could not save your session: QuotaExceededError"
        );
    }
}
