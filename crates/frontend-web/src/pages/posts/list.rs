//! Post list route: filterable, paginated table of posts.
//!
//! Admins see every post and can filter by author; everyone else sees
//! their own. Any filter change snaps back to page 1; responses that
//! arrive after the filters changed again are dropped.

use super::filters::PostFilters;
use crate::app::Route;
use crate::components::{PostTable, TagFilter};
use newsroom_frontend_common::api_client;
use newsroom_frontend_common::auth::{use_auth, AuthAction};
use newsroom_frontend_common::components::Spinner;
use newsroom_frontend_common::toast::{use_toasts, ToastAction, ToastKind};
use newsroom_http::{Post, PostQuery};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(PostList)]
pub fn post_list() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("post list rendered outside a router");

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

    let posts = use_state(Vec::<Post>::new);
    let loading = use_state(|| true);
    let filters = use_state_eq(PostFilters::default);
    let total_pages = use_state(|| 1u32);
    let total_items = use_state(|| 0u64);
    let tag_search = use_state(String::new);

    let session = auth.session.clone();
    let authenticated = session.is_authenticated();
    let is_admin = session.role.as_deref() == Some("admin");

    // fetch on every filter change
    {
        let posts = posts.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        let total_pages = total_pages.clone();
        let total_items = total_items.clone();
        let filters_handle = filters.clone();
        use_effect_with(
            ((*filters).clone(), authenticated, is_admin),
            move |(filters, authenticated, is_admin)| {
                let cancelled = Rc::new(Cell::new(false));
                let guard = cancelled.clone();
                if *authenticated {
                    let filters = filters.clone();
                    let is_admin = *is_admin;
                    spawn_local(async move {
                        let query = PostQuery {
                            page: filters.page,
                            page_size: filters.page_size,
                            title: filters.title.clone(),
                            tags: filters.tags.clone(),
                            user_name: if is_admin {
                                filters.user_name.clone()
                            } else {
                                String::new()
                            },
                        };
                        let result = match api_client() {
                            Ok(client) => {
                                if is_admin {
                                    client.list_posts(&query).await
                                } else {
                                    client.list_my_posts(&query).await
                                }
                            }
                            Err(err) => Err(err),
                        };
                        if cancelled.get() {
                            return;
                        }
                        match result {
                            Ok(page) => {
                                posts.set(page.items.into_iter().map(Post::from).collect());
                                total_pages.set(page.pagination.total_pages.max(1));
                                total_items.set(page.pagination.total);
                                // follow the server if it clamped the page
                                let echoed = page.pagination.page.max(1);
                                if echoed != filters.page {
                                    filters_handle.set(filters.with_page(echoed));
                                }
                            }
                            Err(err) => {
                                toasts.dispatch(ToastAction::Push(
                                    ToastKind::Error,
                                    err.to_string(),
                                ));
                            }
                        }
                        loading.set(false);
                    });
                }
                move || guard.set(true)
            },
        );
    }

    let on_title_change = {
        let filters = filters.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            filters.set(filters.set_title(input.value()));
        })
    };

    let on_user_name_change = {
        let filters = filters.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            filters.set(filters.set_user_name(input.value()));
        })
    };

    let on_tag_search = {
        let tag_search = tag_search.clone();
        Callback::from(move |value: String| tag_search.set(value))
    };

    let on_add_tag = {
        let filters = filters.clone();
        let tag_search = tag_search.clone();
        Callback::from(move |tag: String| {
            filters.set(filters.add_tag(&tag));
            tag_search.set(String::new());
        })
    };

    let on_remove_tag = {
        let filters = filters.clone();
        Callback::from(move |tag: String| filters.set(filters.remove_tag(&tag)))
    };

    let on_page_change = {
        let filters = filters.clone();
        Callback::from(move |page: u32| filters.set(filters.with_page(page)))
    };

    let on_page_size_change = {
        let filters = filters.clone();
        Callback::from(move |page_size: u32| filters.set(filters.with_page_size(page_size)))
    };

    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::PostNew))
    };

    let on_edit = {
        let navigator = navigator.clone();
        Callback::from(move |id: i64| navigator.push(&Route::PostEdit { id }))
    };

    let on_delete = {
        let posts = posts.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message("Delete this post? This cannot be undone.")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let posts = posts.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.delete_post(id).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => {
                        posts.set(posts.iter().filter(|post| post.id != id).cloned().collect());
                        toasts.dispatch(ToastAction::Push(
                            ToastKind::Success,
                            "Post deleted".to_owned(),
                        ));
                    }
                    Err(err) => {
                        toasts.dispatch(ToastAction::Push(ToastKind::Error, err.to_string()));
                    }
                }
            });
        })
    };

    if !authenticated {
        return html! {};
    }

    html! {
        <main class="pt-16 p-4 container mx-auto space-y-4">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-semibold">{"My posts"}</h1>
                <button
                    type="button"
                    class="px-3 py-1.5 text-sm rounded bg-blue-600 text-white"
                    onclick={on_create.clone()}
                >
                    {"Create post"}
                </button>
            </div>
            <section class="border rounded-md p-4">
                <h2 class="text-base font-semibold">{"Filter posts"}</h2>
                <p class="text-sm text-gray-600 mb-3">{"Narrow the list by title, tags or author"}</p>
                <div class="flex flex-col gap-4 md:flex-row md:items-end md:justify-between">
                    <div class="flex flex-col gap-4 md:flex-row md:flex-wrap md:gap-6">
                        <div class="space-y-1">
                            <label class="block text-sm font-medium">{"Title search"}</label>
                            <input
                                type="text"
                                class="w-full md:w-60 border rounded px-3 py-2 text-sm"
                                placeholder="Search post titles..."
                                value={filters.title.clone()}
                                oninput={on_title_change}
                            />
                        </div>
                        if is_admin {
                            <div class="space-y-1">
                                <label class="block text-sm font-medium">{"Author filter"}</label>
                                <input
                                    type="text"
                                    class="w-full md:w-60 border rounded px-3 py-2 text-sm"
                                    placeholder="Name of the post author..."
                                    value={filters.user_name.clone()}
                                    oninput={on_user_name_change}
                                />
                            </div>
                        }
                    </div>
                    <TagFilter
                        selected={filters.tags.clone()}
                        search={(*tag_search).clone()}
                        on_search={on_tag_search}
                        on_add={on_add_tag}
                        on_remove={on_remove_tag}
                    />
                </div>
            </section>
            if *loading {
                <Spinner text={Some("Loading posts...".to_owned())} />
            } else if posts.is_empty() {
                <section class="border rounded-md p-10 text-center space-y-3">
                    <h2 class="text-lg font-semibold">{"No posts yet"}</h2>
                    <p class="text-sm text-gray-600">
                        {"You have no posts. Create the first one now."}
                    </p>
                    <button
                        type="button"
                        class="px-3 py-1.5 text-sm rounded bg-blue-600 text-white"
                        onclick={on_create}
                    >
                        {"Create post"}
                    </button>
                </section>
            } else {
                <PostTable
                    posts={(*posts).clone()}
                    page={filters.page}
                    page_size={filters.page_size}
                    total_pages={*total_pages}
                    total_items={*total_items}
                    on_page_change={on_page_change}
                    on_page_size_change={on_page_size_change}
                    on_edit={on_edit}
                    on_delete={on_delete}
                />
            }
        </main>
    }
}
