//! Login route.

use crate::app::Route;
use newsroom_frontend_common::api_client;
use newsroom_frontend_common::auth::{use_auth, AuthAction};
use newsroom_frontend_common::toast::{use_toasts, ToastAction, ToastKind};
use newsroom_http::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some("Email is required");
    }
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !well_formed {
        return Some("Invalid email address");
    }
    None
}

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("login page rendered outside a router");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| Option::<&'static str>::None);
    let password_error = use_state(|| Option::<&'static str>::None);
    let server_error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    // already signed in, go straight to the dashboard
    {
        let navigator = navigator.clone();
        use_effect_with(auth.session.clone(), move |session| {
            if session.is_authenticated() {
                navigator.replace(&Route::Dashboard);
            }
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
        let auth = auth.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let email_value = email.trim().to_owned();
            let password_value = (*password).clone();

            let email_check = validate_email(&email_value);
            let password_check = password_value
                .is_empty()
                .then_some("Password is required");
            email_error.set(email_check);
            password_error.set(password_check);
            if email_check.is_some() || password_check.is_some() {
                return;
            }

            server_error.set(None);
            submitting.set(true);

            let server_error = server_error.clone();
            let submitting = submitting.clone();
            let auth = auth.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client
                        .login(&LoginRequest {
                            email: email_value,
                            password: password_value,
                        })
                        .await
                        .map(|_| ()),
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => {
                        auth.dispatch(AuthAction::Sync);
                        toasts.dispatch(ToastAction::Push(
                            ToastKind::Success,
                            "Signed in".to_owned(),
                        ));
                        navigator.replace(&Route::Dashboard);
                    }
                    Err(err) => {
                        let message = err.to_string();
                        server_error.set(Some(message.clone()));
                        toasts.dispatch(ToastAction::Push(ToastKind::Error, message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main class="pt-16 p-4 container mx-auto max-w-md">
            <h1 class="text-2xl font-semibold mb-4">{"Login"}</h1>
            if let Some(error) = (*server_error).as_ref() {
                <div class="mb-4 p-4 bg-red-50 border border-red-200 rounded-md">
                    <p class="font-medium text-red-700">{"Something went wrong"}</p>
                    <p class="text-red-700">{error}</p>
                </div>
            }
            <form class="space-y-4" {onsubmit}>
                <div class="space-y-1">
                    <label class="block text-sm font-medium">{"Email"}</label>
                    <input
                        type="email"
                        autocomplete="email"
                        class="w-full border rounded px-3 py-2 text-sm"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                    if let Some(error) = *email_error {
                        <p class="text-sm text-red-600">{error}</p>
                    }
                </div>
                <div class="space-y-1">
                    <label class="block text-sm font-medium">{"Password"}</label>
                    <input
                        type="password"
                        autocomplete="current-password"
                        class="w-full border rounded px-3 py-2 text-sm"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                    if let Some(error) = *password_error {
                        <p class="text-sm text-red-600">{error}</p>
                    }
                </div>
                <button
                    type="submit"
                    class="w-full px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                    disabled={*submitting}
                >
                    { if *submitting { "Signing in..." } else { "Login" } }
                </button>
            </form>
        </main>
    }
}
