//! Single-select list used by the generator form.

use dioxus::prelude::*;

#[component]
pub fn SelectableList(
    items: Vec<String>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        ul { class: "selectable-list",
            for item in items {
                li {
                    key: "{item}",
                    class: if selected.as_deref() == Some(item.as_str()) {
                        "selectable-item selected"
                    } else {
                        "selectable-item"
                    },
                    onclick: {
                        let item = item.clone();
                        move |_| on_select.call(item.clone())
                    },
                    "{item}"
                }
            }
        }
    }
}
