use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Separator,
};
use std::collections::HashMap;
use validator::Validate;

use crate::demo;
use crate::routes::Route;
use crate::session::{persist_session, use_session};

/// Login page with email/password demo authentication.
///
/// Accepts an optional `redirect` query param; after login, navigates
/// there instead of the dashboard. Validation runs client-side; failed
/// credentials render a form banner and nothing else.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    // Store the redirect in a signal so closures can read it without
    // moving ownership.
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        if let Some(path) = redirect_target.read().as_ref() {
            navigator().push(NavigationTarget::<Route>::External(path.clone()));
        } else {
            navigator().push(Route::Dashboard {});
        }
    };

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        if let Err(errors) = request.validate() {
            field_errors.set(AppError::from(errors).field_errors);
            return;
        }

        match demo::authenticate(&request.email, &request.password) {
            Ok(user) => {
                tracing::info!(email = %user.email, role = %user.role, "signed in");
                persist_session(&user.email);
                session.set_user(user);
                go_to_destination();
            }
            Err(err) => {
                tracing::warn!(email = %request.email, "failed sign-in attempt");
                error_msg.set(Some(err.message));
            }
        }
    };

    let email_error = field_errors.read().get("email").cloned();
    let password_error = field_errors.read().get("password").cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access the school portal" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                input_type: "email",
                                label: "Email",
                                placeholder: "you@campanile.edu",
                                value: email(),
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }
                            if let Some(msg) = email_error {
                                span { class: "auth-field-error", "{msg}" }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                label: "Password",
                                placeholder: "At least 8 characters",
                                value: password(),
                                on_input: move |evt: FormEvent| password.set(evt.value()),
                            }
                            if let Some(msg) = password_error {
                                span { class: "auth-field-error", "{msg}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            "Sign In"
                        }
                    }

                    Separator {}

                    div { class: "auth-demo-hint",
                        p { "Demo accounts (password \"demo1234\"):" }
                        ul {
                            for (account_email, role_label) in demo::account_directory() {
                                li { key: "{account_email}",
                                    code { "{account_email}" }
                                    span { " ({role_label})" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
