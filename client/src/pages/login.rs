//! Login page: account + password form.
//!
//! Credential checking belongs to the host. The page validates input and
//! hands it to the [`LoginHandler`] in context, if one was provided.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::{TaButton, TaForm, TaFormItem, TaIcon};
use crate::plugins::message::MessageQueue;

/// Submitted account and password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

/// Receives validated credentials from the login form.
#[derive(Clone, Copy)]
pub struct LoginHandler(pub Callback<Credentials>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoginInputError {
    MissingAccount,
    MissingPassword,
}

impl LoginInputError {
    pub(crate) fn message(self) -> &'static str {
        match self {
            Self::MissingAccount => "Enter your account.",
            Self::MissingPassword => "Enter your password.",
        }
    }
}

/// Trim the account and require both fields. The password is kept verbatim.
pub(crate) fn validate_login_input(account: &str, password: &str) -> Result<Credentials, LoginInputError> {
    let account = account.trim();
    if account.is_empty() {
        return Err(LoginInputError::MissingAccount);
    }
    if password.is_empty() {
        return Err(LoginInputError::MissingPassword);
    }
    Ok(Credentials { account: account.to_owned(), password: password.to_owned() })
}

pub fn render() -> AnyView {
    view! { <LoginPage/> }.into_any()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<LoginInputError>);
    let handler = use_context::<LoginHandler>();
    let messages = use_context::<RwSignal<MessageQueue>>();

    let on_submit = Callback::new(move |()| {
        match validate_login_input(&account.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                error.set(None);
                match handler {
                    Some(LoginHandler(callback)) => callback.run(credentials),
                    None => {
                        log::warn!("login submitted without a handler");
                        if let Some(messages) = messages {
                            messages.update(|q| {
                                q.warning("Sign-in is not available.");
                            });
                        }
                    }
                }
            }
            Err(e) => error.set(Some(e)),
        }
    });

    let account_error = Signal::derive(move || {
        error.get().filter(|e| *e == LoginInputError::MissingAccount).map(|e| e.message().to_owned())
    });
    let password_error = Signal::derive(move || {
        error.get().filter(|e| *e == LoginInputError::MissingPassword).map(|e| e.message().to_owned())
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>
                    <TaIcon name="ios-locked-outline" size="28"/>
                    " Admin"
                </h1>
                <TaForm on_submit=on_submit>
                    <TaFormItem label="Account" error=account_error>
                        <input
                            class="ta-input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || account.get()
                            on:input=move |ev| account.set(event_target_value(&ev))
                        />
                    </TaFormItem>
                    <TaFormItem label="Password" error=password_error>
                        <input
                            class="ta-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </TaFormItem>
                    <TaButton kind="primary" html_type="submit" icon="log-in">
                        "Sign in"
                    </TaButton>
                </TaForm>
            </div>
        </div>
    }
}
