//! Auth gate for protected routes.

use dioxus::prelude::*;
use wallio_ui::Loader;

use crate::session::Session;
use crate::Route;

#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session: Session = use_context();

    use_effect(move || {
        if !session.is_loading() && session.user().is_none() {
            navigator().replace(Route::Login {});
        }
    });

    if session.is_loading() || session.user().is_none() {
        return rsx! {
            div { class: "page-centered", Loader { size: "large" } }
        };
    }
    rsx! {
        {children}
    }
}
