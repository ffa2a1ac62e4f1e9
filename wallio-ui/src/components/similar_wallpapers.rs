//! Similar-wallpapers strip inside the preview modal.

use dioxus::prelude::*;
use wallio_core::Wallpaper;

use super::lazy_image::LazyImage;
use super::loader::Loader;

#[component]
pub fn SimilarWallpapers(
    wallpapers: Vec<Wallpaper>,
    loading: bool,
    error: Option<String>,
    has_more: bool,
    on_click: EventHandler<Wallpaper>,
    on_load_more: EventHandler<()>,
) -> Element {
    if loading {
        return rsx! {
            Loader { size: "small", label: "Finding similar wallpapers..." }
        };
    }
    if let Some(error) = error {
        return rsx! {
            p { class: "similar-error", "{error}" }
        };
    }
    if wallpapers.is_empty() {
        return rsx! {
            p { class: "similar-empty", "No similar wallpapers." }
        };
    }
    rsx! {
        div { class: "similar-strip",
            for wallpaper in wallpapers {
                div {
                    key: "{wallpaper.id}",
                    class: "similar-item",
                    onclick: {
                        let wallpaper = wallpaper.clone();
                        move |_| on_click.call(wallpaper.clone())
                    },
                    LazyImage {
                        src: wallpaper.thumb_url().to_string(),
                        alt: "Similar wallpaper",
                        class: "similar-image",
                    }
                }
            }
            if has_more {
                button {
                    class: "btn btn-secondary similar-more",
                    onclick: move |_| on_load_more.call(()),
                    "More"
                }
            }
        }
    }
}
