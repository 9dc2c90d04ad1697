use dioxus::prelude::*;

use crate::{
    client::{api, router::Route, store::auth::AuthState},
    model::{
        form::FormStatus,
        user::{is_valid_email, CredentialsDto, MIN_PASSWORD_LENGTH},
    },
};

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    SignIn,
    SignUp,
}

/// Sign in and sign up in one modal, the mode toggles which endpoint the form posts to.
#[component]
pub fn SignInModal(on_close: EventHandler<()>) -> Element {
    let mut auth = use_context::<Signal<AuthState>>();
    let nav = use_navigator();

    let mut mode = use_signal(|| Mode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(FormStatus::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if !is_valid_email(&email.read()) {
            status.write().finish_err("Please enter a valid email address");
            return;
        }
        if mode() == Mode::SignUp && password.read().chars().count() < MIN_PASSWORD_LENGTH {
            status.write().finish_err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ));
            return;
        }
        if !status.write().begin() {
            return;
        }

        let credentials = CredentialsDto {
            email: email(),
            password: password(),
        };

        spawn(async move {
            let result = match mode() {
                Mode::SignIn => api::auth::sign_in(&credentials).await,
                Mode::SignUp => api::auth::sign_up(&credentials).await,
            };

            match result {
                Ok(session) => {
                    status.write().finish_ok();
                    auth.write().signed_in(session);
                    on_close.call(());
                    nav.push(Route::Dashboard {});
                }
                Err(err) => status.write().finish_err(err.message),
            }
        });
    };

    let busy = status.read().is_busy();
    let (title, submit_text, switch_text) = match mode() {
        Mode::SignIn => ("Sign in", "Sign in", "No account yet? Sign up"),
        Mode::SignUp => ("Create an account", "Sign up", "Already have an account? Sign in"),
    };

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                form { class: "flex flex-col gap-3 mt-4", onsubmit: submit,
                    input {
                        class: "input w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    if let Some(error) = status.read().error() {
                        p { class: "text-error text-sm", "{error}" }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", r#type: "submit", disabled: busy,
                            "{submit_text}"
                        }
                    }
                }
                button {
                    class: "link link-hover text-sm mt-2",
                    disabled: busy,
                    onclick: move |_| {
                        status.write().reset();
                        mode.set(if mode() == Mode::SignIn { Mode::SignUp } else { Mode::SignIn });
                    },
                    "{switch_text}"
                }
            }
        }
    }
}
