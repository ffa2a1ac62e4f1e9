//! Confirmation dialog for destructive actions.

use dioxus::prelude::*;

use super::modal::Modal;

#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    confirm_label: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirm".to_string());
    rsx! {
        Modal { open, on_close: move |_| on_cancel.call(()),
            div { class: "confirm-dialog",
                h3 { "{title}" }
                p { "{message}" }
                div { class: "confirm-dialog-buttons",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
