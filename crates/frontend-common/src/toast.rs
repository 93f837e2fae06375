//! Transient notification stack.
//!
//! Every user-facing error and success message goes through here; toasts
//! auto-dismiss after [`AppConfig::TOAST_DISMISS_MS`] and never block the
//! UI.

use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(kind, message) => {
                let mut toasts = self.toasts.clone();
                let id = self.next_id;
                toasts.push(Toast { id, kind, message });
                Rc::new(Self {
                    toasts,
                    next_id: id + 1,
                })
            }
            ToastAction::Dismiss(id) => Rc::new(Self {
                toasts: self
                    .toasts
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect(),
                next_id: self.next_id,
            }),
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastList>;

/// Hook to use the toast context.
#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
        .expect("ToastContext not found. Wrap the component tree in ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer_eq(ToastList::default);

    // Auto-dismiss the most recent toast; re-runs per list change, so every
    // pushed toast gets its own timeout. Dismissing an already-removed id
    // is a no-op.
    {
        let toasts = toasts.clone();
        use_effect_with(toasts.toasts.clone(), move |list| {
            if let Some(latest) = list.last() {
                let id = latest.id;
                let toasts = toasts.clone();
                Timeout::new(AppConfig::TOAST_DISMISS_MS, move || {
                    toasts.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }
        });
    }

    html! {
        <ContextProvider<ToastContext> context={toasts.clone()}>
            {props.children.clone()}
            <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
                {toasts.toasts.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "px-4 py-2 rounded-md shadow bg-green-600 text-white text-sm",
                        ToastKind::Error => "px-4 py-2 rounded-md shadow bg-red-600 text-white text-sm",
                    };
                    let ondismiss = {
                        let toasts = toasts.clone();
                        let id = toast.id;
                        Callback::from(move |_| toasts.dispatch(ToastAction::Dismiss(id)))
                    };
                    html! {
                        <div key={toast.id} {class} onclick={ondismiss}>
                            {&toast.message}
                        </div>
                    }
                }).collect::<Html>()}
            </div>
        </ContextProvider<ToastContext>>
    }
}
