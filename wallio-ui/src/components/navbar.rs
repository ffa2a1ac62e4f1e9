//! Top navigation bar.
//!
//! Pure view: route changes, search, theme toggling, and logout all go
//! through callbacks so the web crate keeps ownership of the router and the
//! session.

use dioxus::prelude::*;
use wallio_core::{ThemeMode, User};

use super::icons::{CloseIcon, MenuIcon, MoonIcon, SunIcon};
use super::loader::Loader;
use super::search_box::SearchBox;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

#[component]
pub fn Navbar(
    nav_items: Vec<NavItem>,
    user: Option<User>,
    session_loading: bool,
    theme: ThemeMode,
    show_search: bool,
    search_value: String,
    on_nav_click: EventHandler<String>,
    on_search: EventHandler<String>,
    on_toggle_theme: EventHandler<()>,
    on_login_click: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                a {
                    class: "navbar-logo",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_nav_click.call("wallpapers".to_string());
                    },
                    img { src: crate::LOGO, alt: "Wallio", width: "40", height: "40" }
                }

                if show_search {
                    SearchBox { value: search_value, on_search }
                }

                button {
                    class: "navbar-menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        CloseIcon { class: "icon" }
                    } else {
                        MenuIcon { class: "icon" }
                    }
                }

                div { class: if menu_open() { "navbar-links open" } else { "navbar-links" },
                    for item in nav_items {
                        button {
                            key: "{item.id}",
                            class: if item.is_active { "navbar-link active" } else { "navbar-link" },
                            onclick: {
                                let id = item.id.clone();
                                move |_| {
                                    menu_open.set(false);
                                    on_nav_click.call(id.clone());
                                }
                            },
                            "{item.label}"
                        }
                    }

                    button {
                        class: "navbar-theme-toggle",
                        aria_label: "Toggle theme",
                        onclick: move |_| on_toggle_theme.call(()),
                        match theme {
                            ThemeMode::Light => rsx! { MoonIcon { class: "icon" } },
                            ThemeMode::Dark => rsx! { SunIcon { class: "icon" } },
                        }
                    }

                    if session_loading {
                        Loader { size: "small" }
                    } else if let Some(user) = user {
                        button {
                            class: "navbar-profile",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_nav_click.call("profile".to_string());
                            },
                            if let Some(pic) = &user.profile_pic_url {
                                img { class: "navbar-avatar", src: "{pic}", alt: "{user.name}" }
                            }
                            span { "{user.name}" }
                        }
                        button {
                            class: "navbar-link",
                            onclick: move |_| on_logout.call(()),
                            "Logout"
                        }
                    } else {
                        button {
                            class: "btn btn-primary navbar-login",
                            onclick: move |_| on_login_click.call(()),
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
