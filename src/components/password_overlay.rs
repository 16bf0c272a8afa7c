//! Password Overlay
//!
//! Full-window gate shown until the correct password is entered.

use dioxus::prelude::*;
use flipgallery_core::{Session, UnlockResult};

use crate::context::use_session;

fn submit(mut session: Signal<Session>) {
    match session.write().submit() {
        UnlockResult::Success { first_unlock } => {
            tracing::debug!(first_unlock, "Overlay submit accepted");
        }
        UnlockResult::Failure { .. } => {
            tracing::debug!("Overlay submit rejected");
        }
    }
}

#[component]
pub fn PasswordOverlay() -> Element {
    let mut session = use_session();

    let (visible, input, error) = {
        let s = session.read();
        (
            s.gate.overlay_visible(),
            s.gate.input().to_string(),
            s.gate.error_message().unwrap_or_default(),
        )
    };

    if !visible {
        return VNode::empty();
    }

    rsx! {
        div { id: "password-overlay", class: "password-overlay",
            div { class: "password-box",
                h2 { class: "password-box__title", "Enter Password" }

                input {
                    id: "password-input",
                    class: "password-box__input",
                    r#type: "password",
                    placeholder: "Password",
                    autofocus: true,
                    value: "{input}",
                    oninput: move |evt| session.write().gate.set_input(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit(session);
                        }
                    },
                }

                button {
                    class: "password-box__submit",
                    onclick: move |_| submit(session),
                    "Unlock"
                }

                p { id: "error-message", class: "password-box__error", "{error}" }
            }
        }
    }
}
