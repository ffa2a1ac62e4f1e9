//! Auth session service.
//!
//! Holds the current user and a loading flag, seeded from the settings
//! store at startup. The watchdog re-checks the stored token's embedded
//! expiry once a minute and clears both the in-memory user and the
//! persisted token/user when it has passed.

use chrono::Utc;
use dioxus::prelude::*;
use tracing::info;
use wallio_core::session::{token_expired, EXPIRY_CHECK_INTERVAL};
use wallio_core::User;
use wallio_ui::Toasts;

use crate::settings;

#[derive(Clone, Copy)]
pub struct Session {
    user: Signal<Option<User>>,
    loading: Signal<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn user(&self) -> Option<User> {
        (self.user)()
    }

    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }

    /// Re-read the cached user record; called at startup and after the
    /// OAuth callback lands.
    pub fn refresh_from_storage(&mut self) {
        self.user.set(settings::load_user());
        self.loading.set(false);
    }

    pub fn login(&mut self, user: User, token: &str) {
        settings::store_login(&user, token);
        self.user.set(Some(user));
        self.loading.set(false);
    }

    pub fn logout(&mut self) {
        settings::clear_session();
        self.user.set(None);
    }

    /// One watchdog pass. Returns `true` when the session was cleared:
    /// either the token's embedded expiry has passed, or a user is held in
    /// memory with no token behind it.
    pub fn expire_if_needed(&mut self) -> bool {
        let logged_in = self.user.peek().is_some();
        match settings::load_token() {
            Some(token) if token_expired(&token, Utc::now()) => {
                info!("bearer token expired; clearing session");
                self.logout();
                true
            }
            None if logged_in => {
                self.logout();
                true
            }
            _ => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs for the lifetime of the app root.
pub async fn expiry_watchdog(mut session: Session) {
    loop {
        sleep_interval().await;
        if session.expire_if_needed() {
            if let Some(mut toasts) = try_consume_context::<Toasts>() {
                toasts.error("Your session has expired, please log in again");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_interval() {
    gloo_timers::future::TimeoutFuture::new(EXPIRY_CHECK_INTERVAL.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_interval() {
    tokio::time::sleep(EXPIRY_CHECK_INTERVAL).await;
}
