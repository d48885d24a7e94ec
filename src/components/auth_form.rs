use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::UseAuthHandle;
use crate::state::AuthAction;

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    SignUp,
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
    pub auth: UseAuthHandle,
    /// Navigate to the other auth view.
    pub on_switch: Callback<()>,
}

/// Login/signup form shared between both views; signup adds the name and
/// confirm-password fields.
#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let auth = &props.auth;
    let state = auth.state.clone();

    let on_submit = {
        let submit = match props.mode {
            AuthMode::Login => auth.submit_login.clone(),
            AuthMode::SignUp => auth.submit_signup.clone(),
        };
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_name_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(AuthAction::SetName(input.value()));
        })
    };
    let on_email_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(AuthAction::SetEmail(input.value()));
        })
    };
    let on_password_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(AuthAction::SetPassword(input.value()));
        })
    };
    let on_confirm_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(AuthAction::SetConfirmPassword(input.value()));
        })
    };

    let (title, submit_label) = match props.mode {
        AuthMode::Login => ("Login", "Login"),
        AuthMode::SignUp => ("Sign Up", "Sign Up"),
    };

    let field_error = |field: &str| -> Html {
        match state.errors.get(field) {
            Some(message) => html! { <p class="field-error">{ message }</p> },
            None => Html::default(),
        }
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{ title }</h1>

                { if let Some(server_error) = &state.server_error {
                    html! { <div class="alert alert-error">{ server_error }</div> }
                } else {
                    Html::default()
                } }

                <form class="auth-form" onsubmit={on_submit}>
                    { if props.mode == AuthMode::SignUp {
                        html! {
                            <div class="form-group">
                                <label for="name">{ "Name" }</label>
                                <input
                                    type="text"
                                    id="name"
                                    value={state.name.clone()}
                                    oninput={on_name_input}
                                />
                                { field_error("name") }
                            </div>
                        }
                    } else {
                        Html::default()
                    } }

                    <div class="form-group">
                        <label for="email">{ "Email" }</label>
                        <input
                            type="email"
                            id="email"
                            value={state.email.clone()}
                            oninput={on_email_input}
                        />
                        { field_error("email") }
                    </div>

                    <div class="form-group">
                        <label for="password">{ "Password" }</label>
                        <input
                            type="password"
                            id="password"
                            value={state.password.clone()}
                            oninput={on_password_input}
                        />
                        { field_error("password") }
                    </div>

                    { if props.mode == AuthMode::SignUp {
                        html! {
                            <div class="form-group">
                                <label for="confirm-password">{ "Confirm Password" }</label>
                                <input
                                    type="password"
                                    id="confirm-password"
                                    value={state.confirm_password.clone()}
                                    oninput={on_confirm_input}
                                />
                                { field_error("confirmPassword") }
                            </div>
                        }
                    } else {
                        Html::default()
                    } }

                    <button type="submit" class="btn-primary" disabled={auth.submitting}>
                        { if auth.submitting {
                            html! { <span class="spinner" /> }
                        } else {
                            html! { {submit_label} }
                        } }
                    </button>
                </form>

                <p class="auth-switch">
                    { match props.mode {
                        AuthMode::Login => "Don't have an account?",
                        AuthMode::SignUp => "Already have an account?",
                    } }
                    <button type="button" class="btn-link" onclick={props.on_switch.reform(|_| ())}>
                        { match props.mode {
                            AuthMode::Login => "Sign Up",
                            AuthMode::SignUp => "Login",
                        } }
                    </button>
                </p>
            </div>
        </div>
    }
}
