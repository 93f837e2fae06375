//! Post creation route.

use super::form::{FormMode, PostForm, PostFormValues};
use crate::app::Route;
use newsroom_frontend_common::api_client;
use newsroom_frontend_common::auth::{use_auth, AuthAction};
use newsroom_frontend_common::toast::{use_toasts, ToastAction, ToastKind};
use newsroom_http::CreatePostRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(PostCreate)]
pub fn post_create() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("post create rendered outside a router");

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

    let submitting = use_state(|| false);

    let on_submit = {
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        let submitting = submitting.clone();
        Callback::from(move |values: PostFormValues| {
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            spawn_local(async move {
                let request = CreatePostRequest {
                    title: values.title,
                    content: values.content,
                    published: values.published.then_some(true),
                    category_name: values.category_name,
                };
                let result = match api_client() {
                    Ok(client) => client.create_post(&request).await.map(|_| ()),
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => {
                        toasts.dispatch(ToastAction::Push(
                            ToastKind::Success,
                            "Post created".to_owned(),
                        ));
                        navigator.replace(&Route::Posts);
                    }
                    Err(err) => {
                        toasts.dispatch(ToastAction::Push(ToastKind::Error, err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if !auth.session.is_authenticated() {
        return html! {};
    }

    html! {
        <main class="pt-16 p-4 container mx-auto">
            <h1 class="text-2xl font-semibold mb-4">{"Create post"}</h1>
            <PostForm
                mode={FormMode::Create}
                on_submit={on_submit}
                show_category={true}
                submitting={*submitting}
            />
        </main>
    }
}
