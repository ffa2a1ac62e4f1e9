//! Wildcard 404 page.

use dioxus::prelude::*;
use wallio_ui::SearchBox;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        div { class: "not-found-page",
            img {
                class: "not-found-image",
                src: wallio_ui::FALLBACK_IMAGE,
                alt: "Page not found",
            }
            h1 { "Page not found" }
            p { "The page you're looking for doesn't exist. Try searching instead." }
            SearchBox {
                value: String::new(),
                on_search: move |query: String| {
                    navigator().push(Route::Wallpapers {
                        category: String::new(),
                        search: query,
                    });
                },
            }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to wallpapers" }
        }
    }
}
