//! OAuth redirect landing. Exchanges the provider code for a session, then
//! forwards to the gallery.

use dioxus::prelude::*;
use tracing::error;
use wallio_ui::Loader;

use crate::api;
use crate::session::Session;
use crate::Route;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

const RETRY_DELAY_SECS: u32 = 5;

#[component]
pub fn AuthCallback(code: String, state: String) -> Element {
    let mut session: Session = use_context();
    let mut failure = use_signal(|| None::<String>);

    use_hook(move || {
        spawn(async move {
            if code.is_empty() {
                failure.set(Some("No authorization code received".to_string()));
                back_to_login_later().await;
                return;
            }
            match api::auth::google_callback(&code, &state).await {
                Ok(auth) => {
                    session.login(auth.user, &auth.token);
                    navigator().replace(Route::Home {});
                }
                Err(err) => {
                    error!(%err, "oauth code exchange failed");
                    failure.set(Some(
                        "Authentication failed. Please try again.".to_string(),
                    ));
                    back_to_login_later().await;
                }
            }
        });
    });

    rsx! {
        div { class: "page-centered",
            if let Some(message) = failure() {
                div { class: "auth-callback-error",
                    p { class: "page-error", "{message}" }
                    p { "Returning to the sign-in page..." }
                }
            } else {
                Loader { size: "large", label: "Signing you in..." }
            }
        }
    }
}

async fn back_to_login_later() {
    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(RETRY_DELAY_SECS * 1000).await;
    #[cfg(not(target_arch = "wasm32"))]
    sleep(std::time::Duration::from_secs(RETRY_DELAY_SECS as u64)).await;
    navigator().replace(Route::Login {});
}
