//! Shell layout: navbar above the routed outlet, plus the toast host.

use dioxus::prelude::*;
use wallio_ui::{NavItem, Navbar, ToastHost};

use crate::session::Session;
use crate::theme::Theme;
use crate::Route;

#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let mut session: Session = use_context();
    let mut theme: Theme = use_context();

    let user = session.user();
    let role = user.as_ref().map(|u| u.role);

    let gallery_active = matches!(route, Route::Home {} | Route::Wallpapers { .. });
    let mut nav_items = vec![
        NavItem {
            id: "wallpapers".to_string(),
            label: "Wallpapers".to_string(),
            is_active: gallery_active,
        },
        NavItem {
            id: "categories".to_string(),
            label: "Categories".to_string(),
            is_active: matches!(route, Route::Categories {}),
        },
    ];
    if user.is_some() {
        nav_items.push(NavItem {
            id: "favorites".to_string(),
            label: "Favorites".to_string(),
            is_active: matches!(route, Route::Favorites {}),
        });
    }
    if role.is_some_and(|r| r.can_access_admin_panel()) {
        nav_items.push(NavItem {
            id: "admin".to_string(),
            label: "Admin".to_string(),
            is_active: matches!(route, Route::AdminPanel {}),
        });
    }

    let (current_category, current_search) = match &route {
        Route::Wallpapers { category, search } => (category.clone(), search.clone()),
        _ => (String::new(), String::new()),
    };
    let show_search = gallery_active || matches!(route, Route::Categories {});

    rsx! {
        Navbar {
            nav_items,
            user,
            session_loading: session.is_loading(),
            theme: theme.mode(),
            show_search,
            search_value: current_search.clone(),
            on_nav_click: move |id: String| {
                let target = match id.as_str() {
                    "categories" => Route::Categories {},
                    "favorites" => Route::Favorites {},
                    "admin" => Route::AdminPanel {},
                    "profile" => Route::Profile {},
                    _ => Route::Wallpapers {
                        category: String::new(),
                        search: String::new(),
                    },
                };
                navigator().push(target);
            },
            on_search: {
                let category = current_category.clone();
                move |query: String| {
                    // Searching from the categories page drops into the
                    // gallery, like every other search.
                    navigator().push(Route::Wallpapers {
                        category: category.clone(),
                        search: query,
                    });
                }
            },
            on_toggle_theme: move |_| theme.toggle(),
            on_login_click: move |_| {
                navigator().push(Route::Login {});
            },
            on_logout: move |_| {
                session.logout();
                navigator().push(Route::Wallpapers {
                    category: String::new(),
                    search: String::new(),
                });
            },
        }
        main { class: "page", Outlet::<Route> {} }
        ToastHost {}
    }
}
