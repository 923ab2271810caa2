//! Login and registration page.
//!
//! The only public route. Login failures keep their machine-checkable
//! reason from `net::identity` and are translated to user-facing copy
//! here; registration input is rejected client-side, rule by rule, before
//! any network call.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::components::guards::DEFAULT_LANDING_ROUTE;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::identity::AuthError;
use crate::net::types::{RegisterRequest, Role};
use crate::state::session::use_session;
use crate::util::validate::validate_registration;

/// Where a fresh login lands. Admins go straight to their dashboard, the
/// intended pre-login destination is not replayed.
#[cfg(any(test, feature = "hydrate"))]
fn landing_after_login(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Student | Role::Alumni => DEFAULT_LANDING_ROUTE,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(error: &AuthError) -> String {
    match error {
        AuthError::AccountNotActive => {
            "Your account is not active. Please wait for admin approval.".to_owned()
        }
        AuthError::InvalidCredentials => {
            "Invalid email or password. Please try again.".to_owned()
        }
        other => format!("Login failed: {other}"),
    }
}

/// Registration role offered by the form. Admin accounts are provisioned
/// server-side and never offered here.
fn role_from_form_value(value: &str) -> Role {
    if value == "ROLE_ALUMNI" { Role::Alumni } else { Role::Student }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let is_login_view = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let reg_role = RwSignal::new(Role::Student);
    let reg_document_url = RwSignal::new(String::new());

    let switch_view = move |to_login: bool| {
        is_login_view.set(to_login);
        login_email.set(String::new());
        login_password.set(String::new());
        reg_name.set(String::new());
        reg_email.set(String::new());
        reg_password.set(String::new());
        reg_role.set(Role::Student);
        reg_document_url.set(String::new());
        error.set(String::new());
        notice.set(String::new());
        show_password.set(false);
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = login_email.get().trim().to_owned();
        let password_value = login_password.get();
        if email_value.is_empty() || password_value.is_empty() {
            error.set("Please enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(identity) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(landing_after_login(identity.role));
                    }
                }
                Err(e) => {
                    error.set(login_failure_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&email_value, &password_value, session);
            busy.set(false);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let role = reg_role.get();
        let name_value = reg_name.get().trim().to_owned();
        let email_value = reg_email.get().trim().to_owned();
        let password_value = reg_password.get();
        let document_value = reg_document_url.get().trim().to_owned();

        if let Err(reason) =
            validate_registration(role, &name_value, &email_value, &password_value, &document_value)
        {
            error.set(reason);
            return;
        }
        busy.set(true);
        error.set(String::new());
        notice.set(String::new());

        let request = RegisterRequest {
            name: name_value,
            email: email_value,
            password: password_value,
            document_url: match role {
                Role::Alumni => Some(document_value),
                Role::Student | Role::Admin => None,
            },
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::identity::register(&request).await {
                Ok(()) => {
                    switch_view(true);
                    notice.set("Registration successful! Please log in.".to_owned());
                }
                Err(e) => error.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Alumnet"</h1>
                <div class="login-card__toggle">
                    <button
                        class:active=move || is_login_view.get()
                        on:click=move |_| switch_view(true)
                    >
                        "Login"
                    </button>
                    <button
                        class:active=move || !is_login_view.get()
                        on:click=move |_| switch_view(false)
                    >
                        "Register"
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="login-message login-message--notice">{move || notice.get()}</p>
                </Show>

                <Show when=move || is_login_view.get()>
                    <form class="login-form" on:submit=on_login>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || login_email.get()
                            on:input=move |ev| login_email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || login_password.get()
                            on:input=move |ev| login_password.set(event_target_value(&ev))
                        />
                        <label class="login-form__reveal">
                            <input
                                type="checkbox"
                                prop:checked=move || show_password.get()
                                on:change=move |_| show_password.update(|shown| *shown = !*shown)
                            />
                            "Show password"
                        </label>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Login"
                        </button>
                    </form>
                </Show>

                <Show when=move || !is_login_view.get()>
                    <form class="login-form" on:submit=on_register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || reg_name.get()
                            on:input=move |ev| reg_name.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || reg_email.get()
                            on:input=move |ev| reg_email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || reg_password.get()
                            on:input=move |ev| reg_password.set(event_target_value(&ev))
                        />
                        <select
                            class="login-input"
                            on:change=move |ev| reg_role.set(role_from_form_value(&event_target_value(&ev)))
                        >
                            <option value="ROLE_STUDENT" selected=move || reg_role.get() == Role::Student>
                                "Student (@apsit.edu.in)"
                            </option>
                            <option value="ROLE_ALUMNI" selected=move || reg_role.get() == Role::Alumni>
                                "Alumni (other email)"
                            </option>
                        </select>
                        <Show when=move || reg_role.get() == Role::Alumni>
                            <p class="login-form__hint">
                                "Alumni must link a verification document (marksheet, ID card). \
                                 The account activates after admin approval."
                            </p>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Document URL"
                                prop:value=move || reg_document_url.get()
                                on:input=move |ev| reg_document_url.set(event_target_value(&ev))
                            />
                        </Show>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
