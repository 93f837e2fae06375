//! Dashboard route: session summary and logout.

use crate::app::Route;
use newsroom_frontend_common::api_client;
use newsroom_frontend_common::auth::{use_auth, AuthAction};
use newsroom_frontend_common::storage::BrowserBackend;
use newsroom_frontend_common::toast::{use_toasts, ToastAction, ToastKind};
use newsroom_http::SessionStore;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("dashboard rendered outside a router");

    // pick up expiry and rolled tokens on mount
    {
        let auth = auth.clone();
        use_effect_with((), move |_| auth.dispatch(AuthAction::Sync));
    }

    {
        let navigator = navigator.clone();
        use_effect_with(auth.session.clone(), move |session| {
            if !session.is_authenticated() {
                navigator.replace(&Route::Login);
            }
        });
    }

    let on_logout = {
        let auth = auth.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message("Are you sure you want to end this session?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let auth = auth.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let message = match api_client() {
                    Ok(client) => client.logout().await,
                    Err(_) => {
                        // still honor "logout always clears local state"
                        SessionStore::new(Rc::new(BrowserBackend::new())).clear();
                        None
                    }
                };
                auth.dispatch(AuthAction::Sync);
                toasts.dispatch(ToastAction::Push(
                    ToastKind::Success,
                    message.unwrap_or_else(|| "Signed out".to_owned()),
                ));
                navigator.replace(&Route::Login);
            });
        })
    };

    let session = auth.session.clone();
    if !session.is_authenticated() {
        return html! {};
    }

    html! {
        <main class="pt-16 p-4 container mx-auto">
            <h1 class="text-2xl font-semibold mb-4">{"Dashboard"}</h1>
            <div class="mb-4 space-y-1">
                <p>
                    {"Name: "}
                    <span class="font-medium">{session.name.as_deref().unwrap_or("-")}</span>
                </p>
                <p>
                    {"Role: "}
                    <span class="font-medium">{session.role.as_deref().unwrap_or("-")}</span>
                </p>
                <p>
                    {"Token expires at: "}
                    <span class="font-medium">{session.expires_at.as_deref().unwrap_or("-")}</span>
                </p>
            </div>
            <button
                type="button"
                class="bg-red-600 text-white px-4 py-2 rounded"
                onclick={on_logout}
            >
                {"Logout"}
            </button>
        </main>
    }
}
