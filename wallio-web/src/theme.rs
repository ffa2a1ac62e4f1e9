//! Theme service: light/dark mode, persisted and applied as a
//! document-level attribute.

use dioxus::prelude::*;
use wallio_core::ThemeMode;

use crate::settings;

#[derive(Clone, Copy)]
pub struct Theme {
    mode: Signal<ThemeMode>,
}

impl Theme {
    /// Seed from the stored preference, else the OS preference, else light.
    pub fn init() -> Self {
        let mode = settings::load_theme().unwrap_or_else(os_preference);
        apply(mode);
        Self {
            mode: Signal::new(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        (self.mode)()
    }

    pub fn toggle(&mut self) {
        let next = self.mode.peek().toggled();
        self.set(next);
    }

    pub fn set(&mut self, mode: ThemeMode) {
        settings::store_theme(mode);
        apply(mode);
        self.mode.set(mode);
    }
}

/// `prefers-color-scheme` media query.
fn os_preference() -> ThemeMode {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|q| q.matches())
        .unwrap_or(false);
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

fn apply(mode: ThemeMode) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}
