//! Favorites page. Navigation in the preview moves within the loaded
//! favorites list (pulling one more page when stepping past the end), and
//! un-favoriting evicts the item from the list.

use dioxus::prelude::*;
use tracing::{error, warn};
use wallio_core::{GalleryList, Preview, PreviewInfo, SimilarList, Wallpaper};
use wallio_ui::{ImagePreview, Loader, Toasts, WallpaperGrid};

use super::guard::RequireAuth;
use super::wallpapers::SIMILAR_FETCH_LIMIT;
use crate::api;

#[component]
pub fn Favorites() -> Element {
    rsx! {
        RequireAuth {
            FavoritesInner {}
        }
    }
}

#[component]
fn FavoritesInner() -> Element {
    let toasts: Toasts = use_context();

    let mut list = use_signal(GalleryList::default);
    let mut preview = use_signal(Preview::default);
    let mut similar = use_signal(SimilarList::default);

    use_hook(|| {
        let ticket = list.write().begin_reset();
        let mut toasts = toasts;
        spawn(async move {
            match api::wallpapers::get_favorites(ticket.limit, ticket.offset).await {
                Ok(page) => list.write().apply_reset(ticket, page),
                Err(err) => {
                    error!(%err, "failed to load favorites");
                    list.write().fail_reset(ticket, "Failed to load favorites");
                    toasts.error("Failed to load favorites");
                }
            }
        });
    });

    let mut fetch_similar = move |id: i64| {
        let epoch = similar.write().begin_fetch();
        spawn(async move {
            match api::wallpapers::get_similar_wallpapers(id, SIMILAR_FETCH_LIMIT).await {
                Ok(items) => similar.write().apply(epoch, items),
                Err(err) => {
                    warn!(%err, "failed to load similar wallpapers");
                    similar
                        .write()
                        .fail(epoch, "Failed to load similar wallpapers");
                }
            }
        });
    };

    let open_wallpaper = move |wallpaper: Wallpaper| {
        let id = wallpaper.id;
        fetch_similar(id);
        spawn(async move {
            let in_list = list.read().contains(id);
            match api::wallpapers::get_wallpaper_info(id).await {
                Ok(info) => preview.write().show(info, in_list),
                Err(err) => {
                    warn!(%err, "preview info fetch failed, showing summary");
                    // Everything on this page was favorited at fetch time.
                    preview.write().show(
                        PreviewInfo {
                            wallpaper,
                            is_favorite: true,
                        },
                        in_list,
                    );
                }
            }
        });
    };

    let load_more = move |_| {
        let Some(ticket) = list.write().begin_load_more() else {
            return;
        };
        let mut toasts = toasts;
        spawn(async move {
            match api::wallpapers::get_favorites(ticket.limit, ticket.offset).await {
                Ok(page) => list.write().apply_more(ticket, page),
                Err(err) => {
                    warn!(%err, "failed to load more favorites");
                    list.write().fail_more(ticket);
                    toasts.error("Failed to load more favorites");
                }
            }
        });
    };

    // Adjacent navigation is list-positional here; the favorites listing
    // has no next/previous endpoint.
    let mut navigate = move |forward: bool| {
        if !preview.write().begin_navigation() {
            return;
        }
        let mut toasts = toasts;
        spawn(async move {
            let anchor = preview.read().anchor_id(|id| list.read().contains(id));
            let ids: Vec<i64> = list.read().items().iter().map(|w| w.id).collect();
            let position = anchor.and_then(|a| ids.iter().position(|&id| id == a));

            let mut target = match (position, forward) {
                (Some(p), true) => Some(p + 1),
                (Some(p), false) => p.checked_sub(1),
                (None, _) => None,
            };

            if let Some(index) = target {
                if index >= ids.len() {
                    // Stepping past the loaded page: pull one more first.
                    let ticket = list.write().begin_load_more();
                    if let Some(ticket) = ticket {
                        match api::wallpapers::get_favorites(ticket.limit, ticket.offset).await {
                            Ok(page) => list.write().apply_more(ticket, page),
                            Err(err) => {
                                warn!(%err, "failed to extend favorites for navigation");
                                list.write().fail_more(ticket);
                            }
                        }
                    }
                    if index >= list.read().items().len() {
                        target = None;
                    }
                }
            }

            let target_item = target.and_then(|index| list.read().items().get(index).cloned());
            match target_item {
                Some(wallpaper) => match api::wallpapers::get_wallpaper_info(wallpaper.id).await {
                    Ok(info) => preview.write().apply_navigation(info),
                    Err(err) => {
                        warn!(%err, "preview info fetch failed during navigation");
                        preview.write().apply_navigation(PreviewInfo {
                            wallpaper,
                            is_favorite: true,
                        });
                    }
                },
                None => toasts.error("No more favorites to show"),
            }
            preview.write().end_navigation();
        });
    };

    let toggle_favorite = move |(id, make_favorite): (i64, bool)| {
        let mut toasts = toasts;
        spawn(async move {
            let result = if make_favorite {
                api::wallpapers::add_favorite(id).await
            } else {
                api::wallpapers::remove_favorite(id).await
            };
            match result {
                Ok(()) => {
                    if make_favorite {
                        preview.write().set_favorite(id, true);
                        return;
                    }
                    // Removal evicts from this view and closes the preview
                    // when the evicted item is the one on screen.
                    list.write().remove(id);
                    if preview.read().current().map(|c| c.wallpaper.id) == Some(id) {
                        preview.write().close();
                    }
                }
                Err(err) => {
                    warn!(%err, "favorite toggle failed");
                    toasts.error("Failed to update favorite status");
                }
            }
        });
    };

    let items = list.read().items().to_vec();
    let total = list.read().total();
    let loading = list.read().is_loading();
    let page_error = list
        .read()
        .error()
        .filter(|_| items.is_empty())
        .map(str::to_string);
    let mut navigate_back = navigate;

    rsx! {
        div { class: "container",
            h1 { "Favorite Wallpapers" }
            if total > 0 {
                p { class: "favorites-count",
                    if total == 1 {
                        "1 favorite"
                    } else {
                        "{total} favorites"
                    }
                }
            }
            if let Some(message) = page_error {
                div { class: "page-error", "{message}" }
            } else if loading && items.is_empty() {
                div { class: "page-centered", Loader { size: "large", label: "Loading favorites..." } }
            } else {
                WallpaperGrid {
                    wallpapers: items.clone(),
                    has_more: list.read().has_more(),
                    loading_more: loading && !items.is_empty(),
                    on_load_more: load_more,
                    on_wallpaper_click: open_wallpaper,
                }
            }

            if let Some(info) = preview.read().current().cloned() {
                ImagePreview {
                    open: preview.read().is_open(),
                    info,
                    navigating: preview.read().is_navigating(),
                    show_favorite: true,
                    similar: similar.read().visible().to_vec(),
                    similar_loading: similar.read().is_loading(),
                    similar_error: similar.read().error().map(str::to_string),
                    similar_has_more: similar.read().has_more(),
                    on_close: move |_| preview.write().close(),
                    on_next: move |_| navigate(true),
                    on_previous: move |_| navigate_back(false),
                    on_toggle_favorite: toggle_favorite,
                    on_similar_click: open_wallpaper,
                    on_similar_more: move |_| similar.write().load_more(),
                }
            }
        }
    }
}
