//! Post table with pagination controls.

use newsroom_http::Post;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const PAGE_SIZES: [u32; 3] = [10, 20, 50];

#[derive(Properties, PartialEq)]
pub struct PostTableProps {
    pub posts: Vec<Post>,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub on_page_change: Callback<u32>,
    pub on_page_size_change: Callback<u32>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(PostTable)]
pub fn post_table(props: &PostTableProps) -> Html {
    let on_prev = {
        let page = props.page;
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| {
            if page > 1 {
                on_page_change.emit(page - 1);
            }
        })
    };

    let on_next = {
        let page = props.page;
        let total_pages = props.total_pages;
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| {
            if page < total_pages {
                on_page_change.emit(page + 1);
            }
        })
    };

    let on_size_change = {
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                on_page_size_change.emit(size);
            }
        })
    };

    html! {
        <div class="space-y-3">
            <div class="border rounded-md overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Title"}</th>
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Author"}</th>
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Category"}</th>
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Tags"}</th>
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Slug"}</th>
                            <th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                            <th scope="col" class="relative px-4 py-3">
                                <span class="sr-only">{"Actions"}</span>
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        {props.posts.iter().map(|post| {
                            let id = post.id;

                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                Callback::from(move |_| on_edit.emit(id))
                            };
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_| on_delete.emit(id))
                            };

                            html! {
                                <tr key={id}>
                                    <td class="px-4 py-3 text-sm font-medium">{&post.name}</td>
                                    <td class="px-4 py-3 text-sm text-gray-600">{&post.author_name}</td>
                                    <td class="px-4 py-3 text-sm text-gray-600">{&post.category_name}</td>
                                    <td class="px-4 py-3 text-sm text-gray-600">{&post.tags}</td>
                                    <td class="px-4 py-3 text-sm text-gray-600">{&post.slug}</td>
                                    <td class="px-4 py-3 text-sm text-gray-600">{&post.status}</td>
                                    <td class="px-4 py-3 text-right text-sm font-medium">
                                        <div class="flex items-center justify-end gap-2">
                                            <button
                                                type="button"
                                                class="text-blue-600 hover:text-blue-900"
                                                onclick={on_edit}
                                            >
                                                {"Edit"}
                                            </button>
                                            <button
                                                type="button"
                                                class="text-red-600 hover:text-red-900"
                                                onclick={on_delete}
                                            >
                                                {"Delete"}
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>()}
                    </tbody>
                </table>
            </div>
            <div class="flex items-center justify-between text-sm">
                <span class="text-gray-600">
                    {format!("Page {} of {} · {} posts", props.page, props.total_pages, props.total_items)}
                </span>
                <div class="flex items-center gap-2">
                    <select
                        class="border rounded px-2 py-1 text-sm"
                        onchange={on_size_change}
                    >
                        {PAGE_SIZES.iter().map(|size| html! {
                            <option
                                value={size.to_string()}
                                selected={props.page_size == *size}
                            >
                                {format!("{size} / page")}
                            </option>
                        }).collect::<Html>()}
                    </select>
                    <button
                        type="button"
                        class="px-3 py-1.5 border rounded disabled:opacity-50"
                        disabled={props.page <= 1}
                        onclick={on_prev}
                    >
                        {"Previous"}
                    </button>
                    <button
                        type="button"
                        class="px-3 py-1.5 border rounded disabled:opacity-50"
                        disabled={props.page >= props.total_pages}
                        onclick={on_next}
                    >
                        {"Next"}
                    </button>
                </div>
            </div>
        </div>
    }
}
