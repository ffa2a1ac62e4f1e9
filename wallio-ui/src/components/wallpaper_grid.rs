//! Wallpaper grid with a load-more trigger and end message.

use dioxus::prelude::*;
use wallio_core::Wallpaper;

use super::loader::Loader;
use super::wallpaper_card::WallpaperCard;

#[component]
pub fn WallpaperGrid(
    wallpapers: Vec<Wallpaper>,
    has_more: bool,
    loading_more: bool,
    on_load_more: EventHandler<()>,
    on_wallpaper_click: EventHandler<Wallpaper>,
    on_delete: Option<EventHandler<i64>>,
    deleting: Option<bool>,
) -> Element {
    let empty = wallpapers.is_empty();
    rsx! {
        div { class: "wallpaper-grid",
            for wallpaper in wallpapers {
                WallpaperCard {
                    key: "{wallpaper.id}",
                    wallpaper,
                    on_click: on_wallpaper_click,
                    on_delete,
                    deleting,
                }
            }
        }
        if loading_more {
            Loader { label: "Loading more..." }
        } else if has_more {
            div { class: "load-more-row",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_load_more.call(()),
                    "Load more"
                }
            }
        } else {
            p { class: "end-message",
                if empty {
                    "No wallpapers found."
                } else {
                    "You've seen all wallpapers!"
                }
            }
        }
    }
}
