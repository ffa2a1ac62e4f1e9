//! Public gallery page: category filter, infinite wallpaper grid, preview
//! modal with backend next/previous navigation, and admin delete.

use dioxus::prelude::*;
use tracing::{error, warn};
use wallio_core::{GalleryFilter, GalleryList, Preview, SimilarList, Wallpaper};
use wallio_ui::{CategoryFilter, ConfirmDialog, ImagePreview, Loader, Toasts, WallpaperGrid};

use crate::api;
use crate::session::Session;
use crate::Route;

/// Candidates fetched for the similar strip; revealed ten at a time.
pub(crate) const SIMILAR_FETCH_LIMIT: usize = 30;

#[component]
pub fn Home() -> Element {
    rsx! {
        Wallpapers {
            category: String::new(),
            search: String::new(),
        }
    }
}

#[component]
pub fn Wallpapers(category: String, search: String) -> Element {
    let session: Session = use_context();
    let toasts: Toasts = use_context();

    let filter = GalleryFilter::from_query(&category, &search);

    let mut list = use_signal(GalleryList::default);
    let mut preview = use_signal(Preview::default);
    let mut similar = use_signal(SimilarList::default);
    let mut confirm_delete = use_signal(|| None::<i64>);
    let mut deleting = use_signal(|| false);

    let categories = use_resource(|| api::categories::get_categories());

    // Fresh list whenever the filter changes. The ticket's epoch makes a
    // late response for the previous filter a no-op.
    use_effect(use_reactive((&filter,), move |(filter,)| {
        let ticket = list.write().begin_reset();
        spawn(async move {
            match api::wallpapers::get_wallpapers(&filter, ticket.limit, ticket.offset).await {
                Ok(page) => list.write().apply_reset(ticket, page),
                Err(err) => {
                    error!(%err, "failed to load wallpapers");
                    list.write().fail_reset(ticket, "Failed to load wallpapers");
                }
            }
        });
    }));

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
                    preview.write().show_fallback(wallpaper, in_list);
                }
            }
        });
    };

    let load_more = {
        let filter = filter.clone();
        move |_| {
            let Some(ticket) = list.write().begin_load_more() else {
                return;
            };
            let filter = filter.clone();
            let mut toasts = toasts;
            spawn(async move {
                match api::wallpapers::get_wallpapers(&filter, ticket.limit, ticket.offset).await {
                    Ok(page) => list.write().apply_more(ticket, page),
                    Err(err) => {
                        warn!(%err, "failed to load more wallpapers");
                        list.write().fail_more(ticket);
                        toasts.error("Failed to load more wallpapers");
                    }
                }
            });
        }
    };

    let mut navigate = {
        let filter = filter.clone();
        move |forward: bool| {
            if !preview.write().begin_navigation() {
                return;
            }
            let anchor = preview.read().anchor_id(|id| list.read().contains(id));
            let Some(anchor) = anchor else {
                preview.write().end_navigation();
                return;
            };
            let filter = filter.clone();
            let mut toasts = toasts;
            spawn(async move {
                let result = if forward {
                    api::wallpapers::get_next_wallpaper(anchor, &filter).await
                } else {
                    api::wallpapers::get_previous_wallpaper(anchor, &filter).await
                };
                match result {
                    Ok(info) => {
                        let id = info.wallpaper.id;
                        preview.write().apply_navigation(info);
                        fetch_similar(id);
                    }
                    Err(err) => {
                        warn!(%err, "adjacent wallpaper fetch failed");
                        toasts.error("Failed to load the next wallpaper");
                    }
                }
                preview.write().end_navigation();
            });
        }
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
                    preview.write().set_favorite(id, make_favorite);
                    let still_open =
                        preview.read().current().map(|c| c.wallpaper.id) == Some(id);
                    if still_open {
                        // Refresh full info; the optimistic flag above
                        // stands even if this fails.
                        if let Ok(info) = api::wallpapers::get_wallpaper_info(id).await {
                            let in_list = list.read().contains(id);
                            preview.write().show(info, in_list);
                        }
                    }
                }
                Err(err) => {
                    warn!(%err, "favorite toggle failed");
                    toasts.error("Failed to update favorite status");
                }
            }
        });
    };

    let request_delete = move |id: i64| confirm_delete.set(Some(id));

    let perform_delete = move |_| {
        let Some(id) = confirm_delete() else { return };
        confirm_delete.set(None);
        deleting.set(true);
        let mut toasts = toasts;
        spawn(async move {
            match api::wallpapers::delete_wallpaper(id).await {
                Ok(()) => {
                    list.write().remove(id);
                    if preview.read().current().map(|c| c.wallpaper.id) == Some(id) {
                        preview.write().close();
                    }
                    toasts.success("Wallpaper deleted successfully");
                }
                Err(err) => {
                    error!(%err, "failed to delete wallpaper");
                    toasts.error("Failed to delete wallpaper");
                }
            }
            deleting.set(false);
        });
    };

    let can_manage = session
        .user()
        .is_some_and(|u| u.role.can_manage_content());
    let items = list.read().items().to_vec();
    let loading = list.read().is_loading();
    let page_error = list
        .read()
        .error()
        .filter(|_| items.is_empty())
        .map(str::to_string);
    let selected_category = filter.category.clone();
    let current_search = filter.search.clone().unwrap_or_default();
    let cats = categories().and_then(|r| r.ok()).unwrap_or_default();
    let mut navigate_back = navigate.clone();

    rsx! {
        div { class: "container",
            h1 { "Wallpapers" }
            CategoryFilter {
                categories: cats,
                selected: selected_category,
                on_change: move |category: Option<String>| {
                    navigator().push(Route::Wallpapers {
                        category: category.unwrap_or_default(),
                        search: current_search.clone(),
                    });
                },
            }
            if let Some(message) = page_error {
                div { class: "page-error", "{message}" }
            } else if loading && items.is_empty() {
                div { class: "page-centered", Loader { size: "large", label: "Loading wallpapers..." } }
            } else {
                WallpaperGrid {
                    wallpapers: items.clone(),
                    has_more: list.read().has_more(),
                    loading_more: loading && !items.is_empty(),
                    on_load_more: load_more,
                    on_wallpaper_click: open_wallpaper,
                    on_delete: can_manage.then(|| EventHandler::new(request_delete)),
                    deleting: deleting(),
                }
            }

            if let Some(info) = preview.read().current().cloned() {
                ImagePreview {
                    open: preview.read().is_open(),
                    info,
                    navigating: preview.read().is_navigating(),
                    show_favorite: session.user().is_some(),
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

            ConfirmDialog {
                open: confirm_delete().is_some(),
                title: "Delete wallpaper",
                message: "Are you sure you want to delete this wallpaper?",
                confirm_label: "Delete",
                on_confirm: perform_delete,
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}
