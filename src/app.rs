use yew::prelude::*;

use crate::components::{AuthForm, AuthMode, Home, ToastProvider, UploadForm};
use crate::hooks::use_auth;
use crate::utils::storage;

/// The four views of the app. There is no URL router; the current view is
/// plain state, switched the same way the rest of the state moves.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Route {
    Login,
    SignUp,
    Home,
    Upload,
}

#[function_component(App)]
pub fn app() -> Html {
    let dark_mode = use_state(|| false);

    let on_toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_| dark_mode.set(!*dark_mode))
    };

    let theme_class = if *dark_mode { "app theme-dark" } else { "app theme-light" };

    html! {
        <ToastProvider>
            <div class={theme_class}>
                <AppShell dark_mode={*dark_mode} {on_toggle_theme} />
            </div>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
struct AppShellProps {
    dark_mode: bool,
    on_toggle_theme: Callback<()>,
}

#[function_component(AppShell)]
fn app_shell(props: &AppShellProps) -> Html {
    let route = use_state(|| {
        if storage::is_authenticated() {
            Route::Home
        } else {
            Route::Login
        }
    });

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            // The upload view is gated on the persisted flag.
            if target == Route::Upload && !storage::is_authenticated() {
                log::warn!("⚠️ Upload requires authentication, redirecting to login");
                route.set(Route::Login);
                return;
            }
            route.set(target);
        })
    };

    let on_authenticated = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Home))
    };
    let auth = use_auth(on_authenticated);

    let on_logout = {
        let logout = auth.logout.clone();
        let navigate = navigate.clone();
        Callback::from(move |_| {
            logout.emit(());
            navigate.emit(Route::Login);
        })
    };

    let token = auth.state.access_token.clone();

    match *route {
        Route::Login => html! {
            <AuthForm
                mode={AuthMode::Login}
                auth={auth.clone()}
                on_switch={navigate.reform(|_| Route::SignUp)}
            />
        },
        Route::SignUp => html! {
            <AuthForm
                mode={AuthMode::SignUp}
                auth={auth.clone()}
                on_switch={navigate.reform(|_| Route::Login)}
            />
        },
        Route::Home => html! {
            <Home
                {token}
                dark_mode={props.dark_mode}
                on_toggle_theme={props.on_toggle_theme.clone()}
                {on_logout}
                on_create={navigate.reform(|_| Route::Upload)}
            />
        },
        Route::Upload => html! {
            <UploadForm
                {token}
                on_back={navigate.reform(|_| Route::Home)}
            />
        },
    }
}
