use dioxus::prelude::*;

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// Styled button used across the app's forms.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let type_value = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{type_value}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
