//! Admin panel: the image-generation workbench.
//!
//! Submitting a job moves the [`Generation`] machine through
//! `Submitting -> Polling`, and a spawned loop polls the job service every
//! [`POLL_INTERVAL`]. The loop keys on the machine's task id, so any
//! terminal transition (success, failure, reset) stops it; a fresh submit
//! with a new task id orphans an old loop the same way.

use dioxus::prelude::*;
use tracing::{error, info, warn};
use wallio_core::{
    CreateWallpaperRequest, GenerateRequest, Generation, PollOutcome, SubmitOutcome, POLL_INTERVAL,
};
use wallio_ui::{DimensionInputs, LazyImage, Loader, SelectableList, TagManager, Toasts, WandIcon};

use super::guard::RequireAuth;
use crate::api;
use crate::session::Session;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 768;

fn default_tags() -> Vec<String> {
    vec![
        "wallpaper".to_string(),
        "high quality".to_string(),
        "masterpiece".to_string(),
    ]
}

#[component]
pub fn AdminPanel() -> Element {
    rsx! {
        RequireAuth {
            AdminPanelInner {}
        }
    }
}

#[component]
fn AdminPanelInner() -> Element {
    let session: Session = use_context();
    let is_admin = session
        .user()
        .is_some_and(|u| u.role.can_access_admin_panel());

    if !is_admin {
        return rsx! {
            div { class: "container",
                div { class: "access-denied",
                    h1 { "Access denied" }
                    p { "You don't have permission to view this page." }
                }
            }
        };
    }

    rsx! {
        div { class: "container admin-page",
            h1 { "Admin Panel" }
            ImageGenerator {}
        }
    }
}

#[component]
fn ImageGenerator() -> Element {
    let toasts: Toasts = use_context();

    let generators = use_resource(|| api::images::get_generators());
    let categories = use_resource(|| api::categories::get_categories());

    let mut generation = use_signal(Generation::default);
    let mut generator = use_signal(|| None::<String>);
    let mut category = use_signal(|| None::<String>);
    let mut width = use_signal(|| DEFAULT_WIDTH);
    let mut height = use_signal(|| DEFAULT_HEIGHT);
    let mut tags = use_signal(default_tags);
    let mut saving = use_signal(|| false);
    let mut saved_url = use_signal(|| None::<String>);

    // The generation prompt is the category plus the tag list.
    let prompt = move || {
        let mut parts = Vec::new();
        if let Some(cat) = category() {
            parts.push(cat);
        }
        parts.extend(tags());
        parts.join(", ")
    };

    let mut save_wallpaper = move |url: String, thumb: Option<String>| {
        let Some(cat) = category() else { return };
        saving.set(true);
        let mut toasts = toasts;
        let request = CreateWallpaperRequest {
            image_url: url.clone(),
            image_thumb_url: thumb,
            image_medium_url: None,
            category: cat,
            tags: tags(),
        };
        spawn(async move {
            match api::wallpapers::create_wallpaper(&request).await {
                Ok(wallpaper) => {
                    info!(id = wallpaper.id, "generated wallpaper saved");
                    saved_url.set(Some(url));
                    toasts.success("Wallpaper saved to the gallery");
                }
                Err(err) => {
                    error!(%err, "failed to save generated wallpaper");
                    toasts.error("Generated, but saving the wallpaper failed");
                }
            }
            saving.set(false);
        });
    };

    let mut run_poll_loop = move |task_id: String| {
        let mut toasts = toasts;
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                TimeoutFuture::new(POLL_INTERVAL.as_millis() as u32).await;
                #[cfg(not(target_arch = "wasm32"))]
                sleep(POLL_INTERVAL).await;

                // A terminal transition or a newer submit ends this loop.
                if generation.read().task_id() != Some(task_id.as_str()) {
                    return;
                }
                match api::images::get_generation_status(&task_id).await {
                    Ok(resp) => {
                        let thumb = resp.url_path_thumb.clone();
                        let outcome = generation.write().on_status(resp);
                        match outcome {
                            PollOutcome::Continue => {}
                            PollOutcome::Done { url } => {
                                save_wallpaper(url, thumb);
                                return;
                            }
                            PollOutcome::Failed => {
                                let message = generation
                                    .read()
                                    .error()
                                    .unwrap_or("Image generation failed")
                                    .to_string();
                                toasts.error(message);
                                return;
                            }
                        }
                    }
                    Err(err) => {
                        warn!(%err, "generation status poll failed");
                        generation.write().fail("Lost contact with the generator");
                        toasts.error("Lost contact with the generator");
                        return;
                    }
                }
            }
        });
    };

    let submit = move |_| {
        let (Some(generator_type), Some(cat)) = (generator(), category()) else {
            return;
        };
        if generation.read().is_busy() {
            return;
        }
        saved_url.set(None);
        generation.write().begin_submit();
        let request = GenerateRequest {
            prompt: prompt(),
            width: width(),
            height: height(),
            category: cat,
            tags: tags(),
            generator_type,
        };
        let mut toasts = toasts;
        spawn(async move {
            match api::images::generate_image(&request).await {
                Ok(resp) => {
                    let thumb = resp.url_path_thumb.clone();
                    let outcome = generation.write().on_submit_response(resp);
                    match outcome {
                        SubmitOutcome::Poll(task_id) => run_poll_loop(task_id),
                        SubmitOutcome::Done { url } => save_wallpaper(url, thumb),
                        SubmitOutcome::Failed => {
                            let message = generation
                                .read()
                                .error()
                                .unwrap_or("Image generation failed")
                                .to_string();
                            toasts.error(message);
                        }
                    }
                }
                Err(err) => {
                    error!(%err, "generation submit failed");
                    generation.write().fail("Failed to submit generation job");
                    toasts.error("Failed to submit generation job");
                }
            }
        });
    };

    let generator_names = generators().and_then(|r| r.ok()).unwrap_or_default();
    let category_names: Vec<String> = categories()
        .and_then(|r| r.ok())
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.name)
        .collect();
    let busy = generation.read().is_busy();
    let can_submit = !busy && generator().is_some() && category().is_some();
    let result_url = generation.read().result_url().map(str::to_string);
    let already_saved =
        result_url.is_some() && result_url.as_deref() == saved_url().as_deref();
    let failure = generation.read().error().map(str::to_string);
    let polling = generation.read().task_id().is_some();

    rsx! {
        section { class: "image-generator",
            h2 { "Generate a wallpaper" }
            div { class: "generator-form",
                div { class: "generator-field",
                    h3 { "Generator" }
                    if generator_names.is_empty() {
                        p { class: "empty-message", "No generators available." }
                    } else {
                        SelectableList {
                            items: generator_names,
                            selected: generator(),
                            on_select: move |name| generator.set(Some(name)),
                        }
                    }
                }
                div { class: "generator-field",
                    h3 { "Category" }
                    SelectableList {
                        items: category_names,
                        selected: category(),
                        on_select: move |name| category.set(Some(name)),
                    }
                }
                div { class: "generator-field",
                    h3 { "Dimensions" }
                    DimensionInputs {
                        width: width(),
                        height: height(),
                        on_width_change: move |value| width.set(value),
                        on_height_change: move |value| height.set(value),
                    }
                }
                div { class: "generator-field",
                    h3 { "Tags" }
                    TagManager {
                        tags: tags(),
                        on_change: move |next| tags.set(next),
                    }
                }
                p { class: "generator-prompt", "Prompt: {prompt()}" }
                button {
                    class: "btn btn-primary generate-button",
                    disabled: !can_submit,
                    onclick: submit,
                    WandIcon { class: "icon" }
                    if busy {
                        "Generating..."
                    } else {
                        "Generate"
                    }
                }
            }

            if busy {
                div { class: "generator-status",
                    Loader {
                        label: if polling {
                            "Generating image...".to_string()
                        } else {
                            "Submitting job...".to_string()
                        },
                    }
                }
            }
            if let Some(message) = failure {
                div { class: "page-error", "{message}" }
            }
            if let Some(url) = result_url {
                div { class: "generator-result",
                    LazyImage {
                        src: url.clone(),
                        alt: "Generated wallpaper",
                        class: "generator-result-image",
                    }
                    if !already_saved {
                        button {
                            class: "btn btn-primary",
                            disabled: saving(),
                            onclick: move |_| save_wallpaper(url.clone(), None),
                            if saving() {
                                "Saving..."
                            } else {
                                "Save Wallpaper"
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            generation.write().reset();
                            saved_url.set(None);
                        },
                        "Start over"
                    }
                }
            }
        }
    }
}
