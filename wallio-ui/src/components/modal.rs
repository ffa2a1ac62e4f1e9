//! Backdrop-dismissable modal shell.

use dioxus::prelude::*;

use super::icons::CloseIcon;

#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                // Clicks inside the dialog must not reach the backdrop.
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    CloseIcon { class: "icon" }
                }
                {children}
            }
        }
    }
}
