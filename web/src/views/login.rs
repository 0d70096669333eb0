//! Login page view with the e-mail/password form.

use dioxus::prelude::*;
use ui::{icons, use_session, Icon, SessionState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: straight to the list.
    if session().is_signed_in() {
        nav.replace(Route::People {});
    }

    let form_valid = !email().trim().is_empty() && !password().trim().is_empty();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let e = email().trim().to_string();
        let p = password().trim().to_string();

        if e.is_empty() || p.is_empty() {
            error.set(Some("Please fill in all fields.".to_string()));
            return;
        }

        // Not authentication: any non-empty pair signs in.
        session.set(SessionState { user: Some(e) });
        nav.replace(Route::People {});
    };

    rsx! {
        div {
            class: "login-container",

            form {
                onsubmit: handle_submit,

                h1 { "Sign in" }

                if let Some(err) = error() {
                    div {
                        class: "login-error",
                        "{err}"
                    }
                }

                div {
                    class: "input-field",
                    input {
                        r#type: "email",
                        placeholder: "E-mail",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                    Icon {
                        class: "input-icon",
                        width: 16,
                        height: 16,
                        fill: "currentColor",
                        icon: icons::FaUser,
                    }
                }

                div {
                    class: "input-field",
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                    Icon {
                        class: "input-icon",
                        width: 16,
                        height: 16,
                        fill: "currentColor",
                        icon: icons::FaLock,
                    }
                }

                div {
                    class: "recall-forget",
                    label {
                        input { r#type: "checkbox" }
                        " Remember me"
                    }
                    a { href: "#", "Forgot my password" }
                }

                button {
                    r#type: "submit",
                    disabled: !form_valid,
                    "Sign in"
                }

                div {
                    class: "signup-link",
                    p {
                        "Don't have an account? "
                        a { href: "#", "Register" }
                    }
                }
            }
        }
    }
}
