use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaEyeSlash};
use dioxus_free_icons::Icon;

/// Labelled text input.
#[component]
pub fn Input(
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] label: String,
    #[props(default = String::new())] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let type_value = r#type;
    rsx! {
        div { class: "form-field",
            if !label.is_empty() {
                label { class: "field-label", r#for: "{id}", "{label}" }
            }
            input {
                class: "field-input {class}",
                r#type: "{type_value}",
                id: "{id}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// Password input with a visibility toggle.
///
/// The toggle only switches the rendered input between `password` and `text`;
/// the stored value is untouched.
#[component]
pub fn PasswordInput(
    #[props(default = String::new())] class: String,
    #[props(default = "password".to_string())] id: String,
    #[props(default = String::new())] label: String,
    #[props(default = String::new())] placeholder: String,
    value: String,
    visible: bool,
    oninput: EventHandler<FormEvent>,
    ontoggle: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "form-field",
            if !label.is_empty() {
                label { class: "field-label", r#for: "{id}", "{label}" }
            }
            div { class: "password-wrap",
                input {
                    class: "field-input {class}",
                    r#type: if visible { "text" } else { "password" },
                    id: "{id}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
                button {
                    class: "password-toggle",
                    r#type: "button",
                    onclick: move |evt| ontoggle.call(evt),
                    if visible {
                        Icon { icon: FaEyeSlash }
                    } else {
                        Icon { icon: FaEye }
                    }
                }
            }
        }
    }
}
