//! Registration page view with name/email/password/role form.

use api::{AccountsClient, Role};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, PasswordInput};
use ui::forms::{submit_registration, RegisterForm};

use crate::gateway::{AppAccounts, AppNavigator};
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let client = use_context::<AccountsClient>();
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::new);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let mut state = form();
            submit_registration(&mut state, &AppAccounts(client), &AppNavigator(nav)).await;
            form.set(state);
        });
    };

    let state = form();
    let password_class = if state.password_error().is_some() {
        "field-invalid"
    } else {
        ""
    };
    let submit_error = state.submit_error().cloned();

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit: handle_register,
                h1 { class: "auth-title", "Register for an Account" }
                p { class: "auth-subtitle",
                    "Create an account. Already have an account? "
                    Link { class: "auth-link", to: Route::Login {}, "Login here" }
                }

                if let Some(error) = submit_error {
                    div { class: "form-error", "{error}" }
                }

                Input {
                    id: "name",
                    label: "Full Name",
                    placeholder: "John Doe",
                    value: "{state.name()}",
                    oninput: move |evt: FormEvent| form.write().set_name(evt.value()),
                }

                Input {
                    id: "email",
                    label: "Email",
                    placeholder: "johndoe@gmail.com",
                    value: "{state.email()}",
                    oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                }

                PasswordInput {
                    id: "password",
                    label: "Password",
                    class: "{password_class}",
                    placeholder: "***************",
                    value: "{state.password()}",
                    visible: state.password_visible(),
                    oninput: move |evt: FormEvent| form.write().set_password(evt.value()),
                    ontoggle: move |_| form.write().toggle_password_visibility(),
                }

                if let Some(message) = state.password_error() {
                    span { class: "field-hint", "{message}" }
                }

                div { class: "form-field",
                    label { class: "field-label", r#for: "role", "Role" }
                    select {
                        class: "field-input",
                        id: "role",
                        onchange: move |evt| {
                            form.write().set_role(evt.value().parse().unwrap_or_default());
                        },
                        for role in Role::ALL {
                            option {
                                value: role.as_str(),
                                selected: state.role() == role,
                                "{role}"
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "submit-btn",
                    r#type: "submit",
                    disabled: !state.is_submittable(),
                    if state.is_submitting() { "Creating account..." } else { "Register Now" }
                }
            }
        }
    }
}
