use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(ToastState { toasts })
    }
}

thread_local! {
    static NEXT_TOAST_ID: Cell<u32> = Cell::new(0);
}

fn next_toast_id() -> u32 {
    NEXT_TOAST_ID.with(|cell| {
        let id = cell.get().wrapping_add(1);
        cell.set(id);
        id
    })
}

/// Handle for surfacing transient notifications from hooks and components.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    state: UseReducerHandle<ToastState>,
}

impl ToastHandle {
    pub fn new(state: UseReducerHandle<ToastState>) -> Self {
        Self { state }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = next_toast_id();
        self.state.dispatch(ToastAction::Push(Toast {
            id,
            level,
            message,
        }));

        let state = self.state.clone();
        Timeout::new(TOAST_DURATION_MS, move || {
            state.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[hook]
pub fn use_toasts() -> ToastHandle {
    let state =
        use_context::<UseReducerHandle<ToastState>>().expect("ToastProvider missing from tree");
    ToastHandle::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastState, action: ToastAction) -> ToastState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn push_then_dismiss_round_trip() {
        let state = reduce(
            ToastState::default(),
            ToastAction::Push(Toast {
                id: 1,
                level: ToastLevel::Success,
                message: "ok".to_string(),
            }),
        );
        assert_eq!(state.toasts.len(), 1);

        let state = reduce(state, ToastAction::Dismiss(1));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn dismiss_only_removes_matching_id() {
        let mut state = ToastState::default();
        for id in [1, 2] {
            state = reduce(
                state,
                ToastAction::Push(Toast {
                    id,
                    level: ToastLevel::Info,
                    message: format!("toast {}", id),
                }),
            );
        }
        let state = reduce(state, ToastAction::Dismiss(1));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, 2);
    }
}
