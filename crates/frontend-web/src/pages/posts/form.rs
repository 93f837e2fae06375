//! Shared create/edit post form.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFormValues {
    pub title: String,
    pub content: String,
    pub category_name: Option<String>,
    pub published: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Properties, PartialEq)]
pub struct PostFormProps {
    pub mode: FormMode,
    #[prop_or_default]
    pub initial: Option<PostFormValues>,
    pub on_submit: Callback<PostFormValues>,
    pub show_category: bool,
    #[prop_or_default]
    pub submitting: bool,
}

#[function_component(PostForm)]
pub fn post_form(props: &PostFormProps) -> Html {
    let seed = props.initial.clone().unwrap_or_default();
    let title = use_state(|| seed.title.clone());
    let content = use_state(|| seed.content.clone());
    let category = use_state(|| seed.category_name.clone().unwrap_or_default());
    let published = use_state(|| seed.published);

    // re-seed when the initial values arrive (the edit page loads them async)
    {
        let title = title.clone();
        let content = content.clone();
        let category = category.clone();
        let published = published.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            let values = initial.clone().unwrap_or_default();
            title.set(values.title);
            content.set(values.content);
            category.set(values.category_name.unwrap_or_default());
            published.set(values.published);
        });
    }

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            content.set(input.value());
        })
    };

    let on_category_input = {
        let category = category.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            category.set(input.value());
        })
    };

    let on_published_change = {
        let published = published.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            published.set(input.checked());
        })
    };

    let onsubmit = {
        let title = title.clone();
        let content = content.clone();
        let category = category.clone();
        let published = published.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let next_title = title.trim().to_owned();
            let next_content = content.trim().to_owned();
            if next_title.is_empty() || next_content.is_empty() {
                // required fields; block silently
                return;
            }
            let next_category = category.trim().to_owned();
            on_submit.emit(PostFormValues {
                title: next_title,
                content: next_content,
                category_name: (!next_category.is_empty()).then_some(next_category),
                published: *published,
            });
        })
    };

    let heading = match props.mode {
        FormMode::Create => "New post",
        FormMode::Edit => "Edit post",
    };
    let submit_label = match (props.submitting, props.mode) {
        (true, FormMode::Create) => "Saving...",
        (true, FormMode::Edit) => "Updating...",
        (false, FormMode::Create) => "Save",
        (false, FormMode::Edit) => "Update",
    };

    html! {
        <section class="mb-4 border rounded-md p-4">
            <h2 class="text-lg font-semibold mb-3">{heading}</h2>
            <form class="space-y-3" {onsubmit}>
                <div class="space-y-1">
                    <label class="block text-sm font-medium">{"Title"}</label>
                    <input
                        type="text"
                        class="w-full border rounded px-3 py-2 text-sm"
                        value={(*title).clone()}
                        oninput={on_title_input}
                    />
                </div>
                <div class="space-y-1">
                    <label class="block text-sm font-medium">{"Content"}</label>
                    <textarea
                        class="w-full border rounded px-3 py-2 text-sm min-h-30"
                        value={(*content).clone()}
                        oninput={on_content_input}
                    />
                </div>
                if props.show_category {
                    <div class="space-y-1">
                        <label class="block text-sm font-medium">{"Category (optional)"}</label>
                        <input
                            type="text"
                            class="w-full border rounded px-3 py-2 text-sm"
                            value={(*category).clone()}
                            oninput={on_category_input}
                        />
                    </div>
                }
                <div class="flex items-center gap-2">
                    <input
                        id="published"
                        type="checkbox"
                        class="h-4 w-4"
                        checked={*published}
                        onchange={on_published_change}
                    />
                    <label for="published" class="text-sm">{"Publish now"}</label>
                </div>
                <div class="flex items-center justify-end gap-2">
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm rounded bg-blue-600 text-white disabled:opacity-50"
                        disabled={props.submitting}
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </section>
    }
}
