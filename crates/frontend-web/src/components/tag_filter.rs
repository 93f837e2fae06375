//! Tag filter: fixed vocabulary, search box, dropdown add, chip remove.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Tags the API understands.
pub const ALL_TAGS: [&str; 15] = [
    "technology",
    "tech",
    "ai",
    "web",
    "javascript",
    "health",
    "wellness",
    "fitness",
    "nutrition",
    "lifestyle",
    "sports",
    "football",
    "basketball",
    "training",
    "competition",
];

#[derive(Properties, PartialEq)]
pub struct TagFilterProps {
    pub selected: Vec<String>,
    pub search: String,
    pub on_search: Callback<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
}

#[function_component(TagFilter)]
pub fn tag_filter(props: &TagFilterProps) -> Html {
    let needle = props.search.trim().to_lowercase();
    let choices: Vec<&str> = ALL_TAGS
        .iter()
        .copied()
        .filter(|tag| {
            tag.contains(needle.as_str())
                && !props.selected.iter().any(|selected| selected.as_str() == *tag)
        })
        .collect();

    let on_search_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let on_select = {
        let on_add = props.on_add.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
            if value.is_empty() {
                return;
            }
            on_add.emit(value);
            select.set_value("");
        })
    };

    html! {
        <div class="space-y-2 md:min-w-65">
            <label class="block text-sm font-medium">{"Filter tags"}</label>
            <input
                type="text"
                class="max-w-xs border rounded px-3 py-2 text-sm"
                placeholder="Search tags..."
                value={props.search.clone()}
                oninput={on_search_input}
            />
            <select class="w-60 border rounded px-2 py-2 text-sm" onchange={on_select}>
                <option value="" selected={true}>{"Pick a tag"}</option>
                {choices.iter().map(|tag| html! {
                    <option key={*tag} value={*tag}>{*tag}</option>
                }).collect::<Html>()}
            </select>
            if !props.selected.is_empty() {
                <div class="flex flex-wrap gap-2 pt-1">
                    {props.selected.iter().map(|tag| {
                        let on_remove = {
                            let on_remove = props.on_remove.clone();
                            let tag = tag.clone();
                            Callback::from(move |_| on_remove.emit(tag.clone()))
                        };
                        html! {
                            <button
                                key={tag.clone()}
                                type="button"
                                class="rounded-full border px-3 py-1 text-xs flex items-center gap-1"
                                onclick={on_remove}
                            >
                                <span>{tag}</span>
                                <span class="text-gray-500">{"×"}</span>
                            </button>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}
