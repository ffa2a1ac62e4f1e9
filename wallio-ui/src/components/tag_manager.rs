//! Editable tag chips for the generator form.

use dioxus::prelude::*;

use super::icons::CloseIcon;

#[component]
pub fn TagManager(tags: Vec<String>, on_change: EventHandler<Vec<String>>) -> Element {
    let mut draft = use_signal(String::new);

    let add = {
        let tags = tags.clone();
        move |text: String| {
            let text = text.trim().to_string();
            if text.is_empty() || tags.iter().any(|t| t == &text) {
                return;
            }
            let mut next = tags.clone();
            next.push(text);
            on_change.call(next);
        }
    };

    rsx! {
        div { class: "tag-manager",
            div { class: "tag-chips",
                for (index, tag) in tags.iter().enumerate() {
                    span { key: "{tag}", class: "tag-chip",
                        "{tag}"
                        button {
                            class: "tag-remove",
                            aria_label: "Remove tag {tag}",
                            onclick: {
                                let tags = tags.clone();
                                move |_| {
                                    let mut next = tags.clone();
                                    next.remove(index);
                                    on_change.call(next);
                                }
                            },
                            CloseIcon { class: "icon icon-small" }
                        }
                    }
                }
            }
            form {
                class: "tag-add",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    add(draft());
                    draft.set(String::new());
                },
                input {
                    class: "tag-input",
                    placeholder: "Add tag",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { class: "btn btn-secondary", r#type: "submit", "Add" }
            }
        }
    }
}
