//! Landing page.

use dioxus::prelude::*;

use crate::Route;

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Inkwell" }
                p { class: "auth-subtitle", "Write, publish, and manage your stories." }

                div { class: "home-links",
                    Link { class: "btn btn-primary", to: Route::Register {}, "Create an account" }
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
