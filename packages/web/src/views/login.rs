//! Login page view with email/password form.

use api::{AccountsClient, LoginParams};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_context::<AccountsClient>();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let params = LoginParams {
                email: email().trim().to_string(),
                password: password(),
            };
            if params.email.is_empty() || params.password.is_empty() {
                error.set(Some("Please enter your email and password".to_string()));
                return;
            }

            loading.set(true);
            match client.login(&params).await {
                Ok(user) => {
                    tracing::info!(user = %user.display_name(), "logged in");
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit: handle_login,
                h1 { class: "auth-title", "Login" }
                p { class: "auth-subtitle",
                    "Sign in to your account. New to Inkwell? "
                    Link { class: "auth-link", to: Route::Register {}, "Register here" }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    id: "email",
                    label: "Email",
                    placeholder: "johndoe@gmail.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    id: "password",
                    r#type: "password",
                    label: "Password",
                    placeholder: "***************",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "submit-btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
