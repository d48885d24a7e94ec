use yew::prelude::*;

use crate::context::toast::{ToastAction, ToastState};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Provides the toast context and renders the notification stack on top of
/// the app.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<UseReducerHandle<ToastState>> context={state.clone()}>
            { props.children.clone() }
            <ToastHost />
        </ContextProvider<UseReducerHandle<ToastState>>>
    }
}

#[function_component(ToastHost)]
fn toast_host() -> Html {
    let state =
        use_context::<UseReducerHandle<ToastState>>().expect("ToastProvider missing from tree");

    html! {
        <div class="toast-container">
            { for state.toasts.iter().map(|toast| {
                let id = toast.id;
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |_| state.dispatch(ToastAction::Dismiss(id)))
                };
                html! {
                    <div key={id.to_string()} class={toast.level.css_class()} {onclick}>
                        { &toast.message }
                    </div>
                }
            }) }
        </div>
    }
}
