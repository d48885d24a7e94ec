use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::context::toast::{use_toasts, ToastHandle};
use crate::models::{AuthResponse, User};
use crate::services::auth_service;
use crate::state::{validate_login, validate_signup, AuthAction, AuthState};
use crate::utils::storage;

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseReducerHandle<AuthState>,
    pub submitting: bool,
    pub submit_login: Callback<()>,
    pub submit_signup: Callback<()>,
    pub logout: Callback<()>,
}

/// Session manager. Validation runs before any network call; a failed check
/// sets field errors and stops there. On a successful response the session is
/// only mutated when both token and user are present.
#[hook]
pub fn use_auth(on_authenticated: Callback<()>) -> UseAuthHandle {
    let state = use_reducer(AuthState::default);
    let submitting = use_state(|| false);
    let toasts = use_toasts();

    let submit_login = {
        let state = state.clone();
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let on_authenticated = on_authenticated.clone();

        Callback::from(move |_| {
            let errors = validate_login(&*state);
            state.dispatch(AuthAction::SetValidationErrors(errors.clone()));
            state.dispatch(AuthAction::SetServerError(None));
            if !errors.is_empty() {
                log::warn!("⚠️ Login blocked by validation: {} field(s)", errors.len());
                return;
            }

            let email = state.email.clone();
            let password = state.password.clone();
            submitting.set(true);

            let state = state.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                let result = auth_service::login(&email, &password).await;
                submitting.set(false);
                match result {
                    Ok(response) => {
                        apply_auth_response(&state, &toasts, &on_authenticated, response)
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        state.dispatch(AuthAction::SetServerError(Some(
                            "Something went wrong. Please try again.".to_string(),
                        )));
                        toasts.error("Something went wrong. Please try again.");
                    }
                }
            });
        })
    };

    let submit_signup = {
        let state = state.clone();
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        let on_authenticated = on_authenticated.clone();

        Callback::from(move |_| {
            let errors = validate_signup(&*state);
            state.dispatch(AuthAction::SetValidationErrors(errors.clone()));
            state.dispatch(AuthAction::SetServerError(None));
            if !errors.is_empty() {
                log::warn!("⚠️ Signup blocked by validation: {} field(s)", errors.len());
                return;
            }

            let name = state.name.clone();
            let email = state.email.clone();
            let password = state.password.clone();
            submitting.set(true);

            let state = state.clone();
            let submitting = submitting.clone();
            let toasts = toasts.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                let result = auth_service::sign_up(&name, &email, &password).await;
                submitting.set(false);
                match result {
                    Ok(response) => {
                        apply_auth_response(&state, &toasts, &on_authenticated, response)
                    }
                    Err(e) => {
                        log::error!("❌ Signup failed: {}", e);
                        state.dispatch(AuthAction::SetServerError(Some(
                            "Something went wrong. Please try again.".to_string(),
                        )));
                        toasts.error("Something went wrong. Please try again.");
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            storage::set_authenticated(false);
            state.dispatch(AuthAction::Logout);
            log::info!("👋 Logged out");
        })
    };

    UseAuthHandle {
        state,
        submitting: *submitting,
        submit_login,
        submit_signup,
        logout,
    }
}

fn apply_auth_response(
    state: &UseReducerHandle<AuthState>,
    toasts: &ToastHandle,
    on_authenticated: &Callback<()>,
    response: AuthResponse,
) {
    match auth_outcome(response) {
        Ok((access_token, refresh_token, user)) => {
            log::info!("✅ Authenticated as {}", user.email);
            state.dispatch(AuthAction::SetAuthData {
                access_token,
                refresh_token,
                user,
            });
            storage::set_authenticated(true);
            on_authenticated.emit(());
        }
        Err(message) => {
            log::warn!("⚠️ Auth response missing token or user: {}", message);
            toasts.error(message);
        }
    }
}

/// Decides whether a well-formed response opens a session. Both the access
/// token and the user must be present; anything less is a soft failure whose
/// message is surfaced to the user while the session stays untouched.
fn auth_outcome(response: AuthResponse) -> Result<(String, Option<String>, User), String> {
    let AuthResponse {
        message,
        access_token,
        refresh_token,
        user,
    } = response;

    match (access_token, user) {
        (Some(access_token), Some(user)) => Ok((access_token, refresh_token, user)),
        _ => Err(message.unwrap_or_else(|| "Authentication failed".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(token: Option<&str>, user: Option<User>) -> AuthResponse {
        AuthResponse {
            message: Some("Login successful".to_string()),
            access_token: token.map(str::to_string),
            refresh_token: Some("r1".to_string()),
            user,
        }
    }

    fn user() -> User {
        User {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn complete_response_opens_session() {
        let outcome = auth_outcome(response(Some("t1"), Some(user())));
        let (access_token, refresh_token, user) = outcome.unwrap();
        assert_eq!(access_token, "t1");
        assert_eq!(refresh_token.as_deref(), Some("r1"));
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn response_without_token_is_rejected_with_server_message() {
        let mut incomplete = response(None, Some(user()));
        incomplete.message = Some("Invalid credentials".to_string());
        assert_eq!(
            auth_outcome(incomplete),
            Err("Invalid credentials".to_string())
        );
    }

    #[test]
    fn response_without_user_falls_back_to_generic_message() {
        let mut incomplete = response(Some("t1"), None);
        incomplete.message = None;
        assert_eq!(
            auth_outcome(incomplete),
            Err("Authentication failed".to_string())
        );
    }
}
