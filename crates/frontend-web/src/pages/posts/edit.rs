//! Post edit route.
//!
//! The API has no single-post read, so the page loads the user's posts and
//! matches the route ID against them.

use super::form::{FormMode, PostForm, PostFormValues};
use crate::app::Route;
use newsroom_frontend_common::api_client;
use newsroom_frontend_common::auth::{use_auth, AuthAction};
use newsroom_frontend_common::toast::{use_toasts, ToastAction, ToastKind};
use newsroom_http::{PostQuery, UpdatePostRequest};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PostEditProps {
    pub id: i64,
}

#[function_component(PostEdit)]
pub fn post_edit(props: &PostEditProps) -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("post edit rendered outside a router");
    let id = props.id;

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

    let initial = use_state(|| Option::<PostFormValues>::None);
    let loading = use_state(|| true);
    let submitting = use_state(|| false);
    let authenticated = auth.session.is_authenticated();

    // load the post being edited from the user's own list
    {
        let initial = initial.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        use_effect_with((id, authenticated), move |&(id, authenticated)| {
            let cancelled = Rc::new(Cell::new(false));
            let guard = cancelled.clone();
            if authenticated {
                spawn_local(async move {
                    let result = match api_client() {
                        Ok(client) => client.list_my_posts(&PostQuery::new(1, 100)).await,
                        Err(err) => Err(err),
                    };
                    if cancelled.get() {
                        return;
                    }
                    match result {
                        Ok(page) => {
                            let target = page.items.into_iter().find(|record| record.id == id);
                            match target {
                                Some(record) => {
                                    initial.set(Some(PostFormValues {
                                        title: record.name,
                                        content: record.content,
                                        category_name: None,
                                        published: record.status == "published",
                                    }));
                                }
                                None => {
                                    toasts.dispatch(ToastAction::Push(
                                        ToastKind::Error,
                                        "Post not found".to_owned(),
                                    ));
                                    navigator.replace(&Route::Posts);
                                }
                            }
                        }
                        Err(err) => {
                            toasts.dispatch(ToastAction::Push(ToastKind::Error, err.to_string()));
                            navigator.replace(&Route::Posts);
                        }
                    }
                    loading.set(false);
                });
            }
            move || guard.set(true)
        });
    }

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
                let request = UpdatePostRequest {
                    title: values.title,
                    content: values.content,
                    published: values.published,
                };
                let result = match api_client() {
                    Ok(client) => client.update_post(id, &request).await.map(|_| ()),
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => {
                        toasts.dispatch(ToastAction::Push(
                            ToastKind::Success,
                            "Post updated".to_owned(),
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

    if !authenticated {
        return html! {};
    }

    html! {
        <main class="pt-16 p-4 container mx-auto">
            <h1 class="text-2xl font-semibold mb-4">{"Edit post"}</h1>
            if *loading || initial.is_none() {
                <p>{"Loading post..."}</p>
            } else {
                <PostForm
                    mode={FormMode::Edit}
                    initial={(*initial).clone()}
                    on_submit={on_submit}
                    show_category={false}
                    submitting={*submitting}
                />
            }
        </main>
    }
}
