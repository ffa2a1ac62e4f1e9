//! Full-screen preview modal: the open wallpaper, next/previous arrows,
//! favorite toggle, and the similar-wallpapers strip.

use dioxus::prelude::*;
use wallio_core::{PreviewInfo, Wallpaper};

use super::icons::{ChevronLeftIcon, ChevronRightIcon, HeartIcon};
use super::lazy_image::LazyImage;
use super::modal::Modal;
use super::similar_wallpapers::SimilarWallpapers;

#[component]
pub fn ImagePreview(
    open: bool,
    info: PreviewInfo,
    navigating: bool,
    // Favorite toggling needs a session; hidden for anonymous viewers.
    show_favorite: bool,
    similar: Vec<Wallpaper>,
    similar_loading: bool,
    similar_error: Option<String>,
    similar_has_more: bool,
    on_close: EventHandler<()>,
    on_next: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_toggle_favorite: EventHandler<(i64, bool)>,
    on_similar_click: EventHandler<Wallpaper>,
    on_similar_more: EventHandler<()>,
) -> Element {
    let id = info.wallpaper.id;
    let is_favorite = info.is_favorite;
    let category = info.wallpaper.category.name.clone();

    rsx! {
        Modal { open, on_close,
            div { class: "preview",
                div { class: "preview-stage",
                    button {
                        class: "preview-nav preview-nav-prev",
                        aria_label: "Previous wallpaper",
                        disabled: navigating,
                        onclick: move |_| on_previous.call(()),
                        ChevronLeftIcon { class: "icon" }
                    }
                    LazyImage {
                        src: info.wallpaper.image_url.clone(),
                        alt: "Wallpaper from {category}",
                        class: if navigating { "preview-image dimmed" } else { "preview-image" },
                    }
                    button {
                        class: "preview-nav preview-nav-next",
                        aria_label: "Next wallpaper",
                        disabled: navigating,
                        onclick: move |_| on_next.call(()),
                        ChevronRightIcon { class: "icon" }
                    }
                }
                div { class: "preview-meta",
                    span { class: "preview-category", "{category}" }
                    div { class: "preview-tags",
                        for tag in info.wallpaper.tags.iter() {
                            span { key: "{tag.id}", class: "tag-chip", "{tag.name}" }
                        }
                    }
                    if show_favorite {
                        button {
                            class: if is_favorite { "favorite-button active" } else { "favorite-button" },
                            aria_label: if is_favorite { "Remove from favorites" } else { "Add to favorites" },
                            onclick: move |_| on_toggle_favorite.call((id, !is_favorite)),
                            HeartIcon { class: "icon", filled: is_favorite }
                        }
                    }
                }
                div { class: "preview-similar",
                    h3 { "Similar Wallpapers" }
                    SimilarWallpapers {
                        wallpapers: similar,
                        loading: similar_loading,
                        error: similar_error,
                        has_more: similar_has_more,
                        on_click: on_similar_click,
                        on_load_more: on_similar_more,
                    }
                }
            }
        }
    }
}
