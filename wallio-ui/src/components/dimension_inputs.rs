//! Width/height inputs for the generator form.

use dioxus::prelude::*;

#[component]
pub fn DimensionInputs(
    width: u32,
    height: u32,
    on_width_change: EventHandler<u32>,
    on_height_change: EventHandler<u32>,
) -> Element {
    rsx! {
        div { class: "dimension-inputs",
            label { class: "dimension-field",
                span { "Width" }
                input {
                    r#type: "number",
                    min: "64",
                    max: "4096",
                    step: "64",
                    value: "{width}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            on_width_change.call(value);
                        }
                    },
                }
            }
            label { class: "dimension-field",
                span { "Height" }
                input {
                    r#type: "number",
                    min: "64",
                    max: "4096",
                    step: "64",
                    value: "{height}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            on_height_change.call(value);
                        }
                    },
                }
            }
        }
    }
}
