//! Grid card for a single wallpaper.
//!
//! Pure view component; opening the preview and deleting are both forwarded
//! through callbacks.

use dioxus::prelude::*;
use wallio_core::Wallpaper;

use super::icons::TrashIcon;
use super::lazy_image::LazyImage;

#[component]
pub fn WallpaperCard(
    wallpaper: Wallpaper,
    on_click: EventHandler<Wallpaper>,
    // Present only when the viewer may manage content.
    on_delete: Option<EventHandler<i64>>,
    deleting: Option<bool>,
) -> Element {
    let id = wallpaper.id;
    let thumb = wallpaper.thumb_url().to_string();
    let category = wallpaper.category.name.clone();
    let card = wallpaper.clone();

    rsx! {
        div {
            class: "wallpaper-card",
            onclick: move |_| on_click.call(card.clone()),
            LazyImage {
                src: thumb,
                alt: "Wallpaper from {category}",
                class: "wallpaper-card-image",
            }
            div { class: "wallpaper-card-footer",
                span { class: "wallpaper-card-category", "{category}" }
                if !wallpaper.tags.is_empty() {
                    div { class: "wallpaper-card-tags",
                        for tag in wallpaper.tags.iter().take(3) {
                            span { key: "{tag.id}", class: "tag-chip", "{tag.name}" }
                        }
                    }
                }
            }
            if let Some(on_delete) = on_delete {
                button {
                    class: "wallpaper-card-delete",
                    aria_label: "Delete wallpaper",
                    disabled: deleting.unwrap_or(false),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(id);
                    },
                    TrashIcon { class: "icon" }
                }
            }
        }
    }
}
