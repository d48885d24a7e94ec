use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::User;

/// Session state: credentials in progress, issued tokens, the authenticated
/// user and field-level validation errors.
///
/// Invariant: `user` is `Some` iff `access_token` is `Some`. The only
/// transitions touching either are `SetAuthData` (sets both) and `Logout`
/// (clears both).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub email: String,
    pub password: String,
    pub name: String,
    pub confirm_password: String,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
    pub errors: HashMap<String, String>,
    pub server_error: Option<String>,
}

pub enum AuthAction {
    SetEmail(String),
    SetPassword(String),
    SetName(String),
    SetConfirmPassword(String),
    SetAuthData {
        access_token: String,
        refresh_token: Option<String>,
        user: User,
    },
    SetValidationErrors(HashMap<String, String>),
    ClearValidationErrors,
    SetServerError(Option<String>),
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AuthAction::SetEmail(email) => next.email = email,
            AuthAction::SetPassword(password) => next.password = password,
            AuthAction::SetName(name) => next.name = name,
            AuthAction::SetConfirmPassword(confirm) => next.confirm_password = confirm,
            AuthAction::SetAuthData {
                access_token,
                refresh_token,
                user,
            } => {
                next.access_token = Some(access_token);
                next.refresh_token = refresh_token;
                next.user = Some(user);
                next.errors.clear();
                next.server_error = None;
            }
            AuthAction::SetValidationErrors(errors) => next.errors = errors,
            AuthAction::ClearValidationErrors => next.errors.clear(),
            AuthAction::SetServerError(message) => next.server_error = message,
            AuthAction::Logout => next = AuthState::default(),
        }
        Rc::new(next)
    }
}

/// Field checks for login. Returns an empty map when the form is valid; a
/// non-empty map means no network call is made.
pub fn validate_login(state: &AuthState) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if state.email.is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    }
    if state.password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    }

    errors
}

/// Field checks for signup: login checks plus name and password confirmation.
pub fn validate_signup(state: &AuthState) -> HashMap<String, String> {
    let mut errors = validate_login(state);

    if state.name.is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }
    if state.password != state.confirm_password {
        errors.insert(
            "confirmPassword".to_string(),
            "Passwords do not match".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AuthState, action: AuthAction) -> AuthState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn filled_login_form() -> AuthState {
        AuthState {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let empty = AuthState::default();
        let errors = validate_login(&empty);
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password is required")
        );

        assert!(validate_login(&filled_login_form()).is_empty());
    }

    #[test]
    fn signup_requires_name() {
        let mut state = filled_login_form();
        state.confirm_password = "x".to_string();
        let errors = validate_signup(&state);
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let mut state = filled_login_form();
        state.name = "A".to_string();
        state.confirm_password = "y".to_string();
        let errors = validate_signup(&state);
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn signup_valid_form_has_no_errors() {
        let mut state = filled_login_form();
        state.name = "A".to_string();
        state.confirm_password = "x".to_string();
        assert!(validate_signup(&state).is_empty());
    }

    #[test]
    fn set_auth_data_populates_session() {
        let state = reduce(
            filled_login_form(),
            AuthAction::SetAuthData {
                access_token: "t1".to_string(),
                refresh_token: Some("t2".to_string()),
                user: User {
                    name: "A".to_string(),
                    email: "a@b.com".to_string(),
                },
            },
        );
        assert_eq!(state.access_token.as_deref(), Some("t1"));
        assert_eq!(state.refresh_token.as_deref(), Some("t2"));
        assert_eq!(state.user.as_ref().unwrap().name, "A");
        // user and access_token always move together
        assert_eq!(state.user.is_some(), state.access_token.is_some());
    }

    #[test]
    fn logout_clears_everything() {
        let logged_in = reduce(
            filled_login_form(),
            AuthAction::SetAuthData {
                access_token: "t1".to_string(),
                refresh_token: Some("t2".to_string()),
                user: User {
                    name: "A".to_string(),
                    email: "a@b.com".to_string(),
                },
            },
        );
        let state = reduce(logged_in, AuthAction::Logout);
        assert!(state.access_token.is_none());
        assert!(state.user.is_none());
        assert!(state.refresh_token.is_none());
        assert!(state.errors.is_empty());
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn validation_errors_replace_previous_set() {
        let mut errors = HashMap::new();
        errors.insert("email".to_string(), "Email is required".to_string());
        let state = reduce(AuthState::default(), AuthAction::SetValidationErrors(errors));
        assert_eq!(state.errors.len(), 1);

        let state = reduce(state, AuthAction::ClearValidationErrors);
        assert!(state.errors.is_empty());
    }
}
