//! Top navigation bar.

use crate::app::Route;
use newsroom_frontend_common::api_client;
use newsroom_frontend_common::auth::{use_auth, AuthAction};
use newsroom_frontend_common::toast::{use_toasts, ToastAction, ToastKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("navbar rendered outside a router");

    let logged_in = auth.session.is_authenticated();

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
                    Err(_) => None,
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

    html! {
        <header class="fixed top-0 inset-x-0 z-40 bg-white border-b">
            <nav class="container mx-auto flex items-center justify-between p-3">
                <Link<Route> classes="font-semibold" to={Route::Home}>
                    {"Newsroom"}
                </Link<Route>>
                <div class="flex items-center gap-4 text-sm">
                    if logged_in {
                        <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                        <Link<Route> to={Route::Posts}>{"Posts"}</Link<Route>>
                        <button
                            type="button"
                            class="px-3 py-1.5 rounded bg-red-600 text-white"
                            onclick={on_logout}
                        >
                            {"Logout"}
                        </button>
                    } else {
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    }
                </div>
            </nav>
        </header>
    }
}
