//! Login page: a single Google OAuth entry point.

use dioxus::prelude::*;
use tracing::error;
use wallio_ui::Toasts;

use crate::api;
use crate::session::Session;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let session: Session = use_context();
    let toasts: Toasts = use_context();
    let mut busy = use_signal(|| false);

    // Already signed in: nothing to do here.
    use_effect(move || {
        if session.user().is_some() {
            navigator().replace(Route::Home {});
        }
    });

    let start_login = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        let mut toasts = toasts;
        spawn(async move {
            match api::auth::get_google_auth_url().await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        // Full-page redirect to the provider.
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(err) => {
                    error!(%err, "failed to start login");
                    toasts.error("Failed to start sign-in. Please try again.");
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                img { class: "login-logo", src: wallio_ui::LOGO, alt: "Wallio" }
                h1 { "Sign in to Wallio" }
                p { class: "login-hint", "Save favorites and manage your wallpapers." }
                button {
                    class: "btn btn-primary login-google",
                    disabled: busy(),
                    onclick: start_login,
                    if busy() {
                        "Redirecting..."
                    } else {
                        "Continue with Google"
                    }
                }
            }
        }
    }
}
