pub mod api;
pub mod pages;
pub mod session;
pub mod settings;
pub mod theme;

use dioxus::prelude::*;
use pages::{
    AdminPanel, AuthCallback, Categories, Favorites, Home, Login, NotFound, Profile, Shell,
    Wallpapers,
};
use wallio_ui::Toasts;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/login")]
    Login {},
    #[route("/auth/google/callback?:code&:state")]
    AuthCallback { code: String, state: String },
    #[route("/")]
    Home {},
    #[route("/wallpapers?:category&:search")]
    Wallpapers { category: String, search: String },
    #[route("/categories")]
    Categories {},
    #[route("/favorites")]
    Favorites {},
    #[route("/profile")]
    Profile {},
    #[route("/admin-panel")]
    AdminPanel {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(Toasts::new);
    let theme = use_context_provider(theme::Theme::init);
    let mut session = use_context_provider(session::Session::new);

    // Seed the session from storage once, then keep the expiry watchdog
    // running for the lifetime of the app.
    use_hook(|| {
        session.refresh_from_storage();
        spawn(session::expiry_watchdog(session));
    });

    let mode = theme.mode();
    rsx! {
        document::Link { rel: "icon", href: wallio_ui::LOGO }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app", "data-theme": "{mode}", Router::<Route> {} }
    }
}
