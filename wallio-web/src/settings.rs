//! Persisted settings: thin wrapper over `window.localStorage`.
//!
//! Three keys: the bearer token, the cached user record, and the theme
//! preference. Token and user are written and cleared together on
//! login/logout/expiry. No validation or migration; an unreadable user
//! entry just reads as `None`.

use tracing::warn;
use wallio_core::{ThemeMode, User};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const THEME_KEY: &str = "theme";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

fn set(key: &str, value: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(key, value).is_err() {
            warn!(key, "failed to write local storage");
        }
    }
}

fn remove(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn load_token() -> Option<String> {
    get(TOKEN_KEY)
}

pub fn load_user() -> Option<User> {
    let raw = get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            warn!(%err, "stored user record is unreadable");
            None
        }
    }
}

/// Token and user persist together on a successful login.
pub fn store_login(user: &User, token: &str) {
    set(TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => set(USER_KEY, &json),
        Err(err) => warn!(%err, "failed to serialize user record"),
    }
}

/// Token and user clear together on logout and on detected expiry.
pub fn clear_session() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}

pub fn load_theme() -> Option<ThemeMode> {
    get(THEME_KEY)?.parse().ok()
}

pub fn store_theme(mode: ThemeMode) {
    set(THEME_KEY, mode.as_str());
}
