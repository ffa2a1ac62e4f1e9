//! Search input that reports on submit or clear.

use dioxus::prelude::*;

use super::icons::SearchIcon;

#[component]
pub fn SearchBox(value: String, on_search: EventHandler<String>) -> Element {
    let mut draft = use_signal(|| value.clone());

    rsx! {
        form {
            class: "search-box",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_search.call(draft().trim().to_string());
            },
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search wallpapers...",
                value: "{draft}",
                oninput: move |evt| {
                    let text = evt.value();
                    // Clearing the field drops the search filter right away;
                    // everything else waits for submit.
                    if text.is_empty() && !draft().is_empty() {
                        on_search.call(String::new());
                    }
                    draft.set(text);
                },
            }
            button { class: "search-submit", r#type: "submit", aria_label: "Search",
                SearchIcon { class: "icon" }
            }
        }
    }
}
