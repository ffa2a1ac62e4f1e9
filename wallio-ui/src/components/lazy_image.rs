//! Image that swaps in a fallback asset when the URL is broken.

use dioxus::prelude::*;

use crate::FALLBACK_IMAGE;

#[component]
pub fn LazyImage(src: String, alt: String, class: Option<String>) -> Element {
    let mut failed = use_signal(|| false);
    let shown = if failed() {
        FALLBACK_IMAGE.to_string()
    } else {
        src
    };
    rsx! {
        img {
            class: class.unwrap_or_default(),
            src: "{shown}",
            alt: "{alt}",
            loading: "lazy",
            onerror: move |_| failed.set(true),
        }
    }
}
