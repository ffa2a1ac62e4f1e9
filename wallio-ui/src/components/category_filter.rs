//! Horizontal category filter strip above the gallery.

use dioxus::prelude::*;
use wallio_core::Category;

#[component]
pub fn CategoryFilter(
    categories: Vec<Category>,
    selected: Option<String>,
    // Called with `None` for "All".
    on_change: EventHandler<Option<String>>,
) -> Element {
    rsx! {
        div { class: "category-filter",
            button {
                class: if selected.is_none() { "category-pill selected" } else { "category-pill" },
                onclick: move |_| on_change.call(None),
                "All"
            }
            for category in categories {
                button {
                    key: "{category.id}",
                    class: if selected.as_deref() == Some(category.name.as_str()) {
                        "category-pill selected"
                    } else {
                        "category-pill"
                    },
                    onclick: {
                        let name = category.name.clone();
                        move |_| on_change.call(Some(name.clone()))
                    },
                    "{category.name}"
                }
            }
        }
    }
}
