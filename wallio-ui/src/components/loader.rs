//! Spinner shown while a page or action is loading.

use dioxus::prelude::*;

#[component]
pub fn Loader(size: Option<String>, label: Option<String>) -> Element {
    let size = size.unwrap_or_else(|| "medium".to_string());
    rsx! {
        div { class: "loader loader-{size}", role: "status",
            div { class: "loader-ring" }
            if let Some(label) = label {
                span { class: "loader-label", "{label}" }
            }
        }
    }
}
