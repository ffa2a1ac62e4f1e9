//! Account page for the signed-in user.

use dioxus::prelude::*;
use wallio_ui::LazyImage;

use super::guard::RequireAuth;
use crate::session::Session;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireAuth {
            ProfileInner {}
        }
    }
}

#[component]
fn ProfileInner() -> Element {
    let mut session: Session = use_context();
    // RequireAuth guarantees a user here; render nothing in the logout race.
    let Some(user) = session.user() else {
        return rsx! {};
    };

    let member_since = user.created_at.format("%B %e, %Y").to_string();

    rsx! {
        div { class: "container profile-page",
            h1 { "Profile" }
            div { class: "profile-card",
                if let Some(url) = user.profile_pic_url.clone() {
                    LazyImage {
                        src: url,
                        alt: user.name.clone(),
                        class: "profile-avatar",
                    }
                } else {
                    div { class: "profile-avatar profile-avatar-placeholder",
                        "{initials(&user.name)}"
                    }
                }
                div { class: "profile-details",
                    h2 { "{user.name}" }
                    p { class: "profile-email", "{user.email}" }
                    dl { class: "profile-meta",
                        dt { "Role" }
                        dd { "{user.role}" }
                        dt { "Signed in with" }
                        dd { "{user.auth_type}" }
                        dt { "Member since" }
                        dd { "{member_since}" }
                    }
                }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| {
                    session.logout();
                    navigator().push(Route::Home {});
                },
                "Log out"
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("plato"), "P");
        assert_eq!(initials("anna maria van schurman"), "AM");
        assert_eq!(initials(""), "");
    }
}
