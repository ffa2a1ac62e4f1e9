//! wallio-ui - pure view components for wallio
//!
//! Components here render state and forward user intents through callback
//! props. No network access and no router calls; the web crate owns both.

pub mod components;
pub mod toast;

use dioxus::prelude::*;

pub use components::*;
pub use toast::{Toast, ToastHost, ToastKind, Toasts};

/// Brand mark, also used as the app favicon.
pub const LOGO: Asset = asset!("/assets/logo.svg");
/// Shown in place of images that fail to load.
pub const FALLBACK_IMAGE: Asset = asset!("/assets/not-found-image.svg");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_assets_resolve_to_svg_paths() {
        assert!(LOGO.to_string().ends_with(".svg"));
        assert!(FALLBACK_IMAGE.to_string().ends_with(".svg"));
    }
}
