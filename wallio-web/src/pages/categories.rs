//! Category browser. Clicking a card opens the gallery filtered to it.

use dioxus::prelude::*;
use wallio_ui::{LazyImage, Loader};

use crate::api;
use crate::Route;

#[component]
pub fn Categories() -> Element {
    let categories = use_resource(|| api::categories::get_categories());

    rsx! {
        div { class: "container",
            h1 { "Categories" }
            match &*categories.read() {
                None => rsx! {
                    div { class: "page-centered", Loader { size: "large", label: "Loading categories..." } }
                },
                Some(Err(_)) => rsx! {
                    div { class: "page-error", "Failed to load categories" }
                },
                Some(Ok(items)) if items.is_empty() => rsx! {
                    p { class: "empty-message", "No categories yet." }
                },
                Some(Ok(items)) => rsx! {
                    div { class: "category-grid",
                        for category in items.clone() {
                            div {
                                key: "{category.id}",
                                class: "category-card",
                                onclick: {
                                    let name = category.name.clone();
                                    move |_| {
                                        navigator().push(Route::Wallpapers {
                                            category: name.clone(),
                                            search: String::new(),
                                        });
                                    }
                                },
                                if let Some(url) = category.preview_url.clone() {
                                    LazyImage {
                                        src: url,
                                        alt: category.name.clone(),
                                        class: "category-preview",
                                    }
                                } else {
                                    div { class: "category-preview category-preview-empty" }
                                }
                                div { class: "category-body",
                                    h2 { class: "category-name", "{category.name}" }
                                    if let Some(description) = category.description.clone() {
                                        p { class: "category-description", "{description}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
