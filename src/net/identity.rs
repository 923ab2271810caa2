//! Login and registration calls to the remote identity service.
//!
//! The service is a black box: it issues the opaque bearer credential and
//! owns password policy, activation, and role assignment. This module only
//! consumes its results and classifies its rejections so callers can tell
//! "wrong password" from "account awaiting approval" without string-matching
//! in the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use thiserror::Error;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ApiMessage;
use crate::net::types::{Identity, RegisterRequest};

/// Base path of the identity service endpoints.
pub const AUTH_BASE: &str = "/api/auth";

/// Failure of a login or registration attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identity service never produced a response. Says nothing about
    /// whether the visitor is logged in.
    #[error("could not reach the identity service: {0}")]
    Transport(String),
    /// The service rejected the email + password pair.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Credentials were correct but the account awaits admin approval.
    #[error("account is not active")]
    AccountNotActive,
    /// Any other non-2xx answer, with the service's own message.
    #[error("identity service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// A 2xx answer whose body was not the expected shape.
    #[error("could not decode identity response: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_url(path: &str) -> String {
    format!("{AUTH_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn body_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .map(|payload| payload.message)
        .unwrap_or_else(|_| {
            let raw = body.trim();
            if raw.is_empty() {
                format!("status {status}")
            } else {
                raw.to_owned()
            }
        })
}

/// Classify a non-2xx login response.
///
/// The service distinguishes inactive accounts only through its message
/// text, so that check runs first; plain credential rejections come back as
/// 401/403.
#[cfg(any(test, feature = "hydrate"))]
fn classify_login_failure(status: u16, body: &str) -> AuthError {
    let message = body_message(status, body);
    if message.contains("not active") {
        AuthError::AccountNotActive
    } else if status == 401 || status == 403 {
        AuthError::InvalidCredentials
    } else {
        AuthError::Rejected { status, message }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_register_failure(status: u16, body: &str) -> AuthError {
    AuthError::Rejected {
        status,
        message: body_message(status, body),
    }
}

/// Exchange an email + password for a `(credential, identity)` pair via
/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`AuthError`] with the rejection reason; the caller owns the
/// user-facing message.
pub async fn login(email: &str, password: &str) -> Result<(String, Identity), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&auth_url("/login"))
            .json(&payload)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(classify_login_failure(status, &body));
        }
        let parsed: crate::net::types::LoginResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok((parsed.jwt_token, parsed.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Transport("not available outside the browser".to_owned()))
    }
}

/// Create a membership account via `POST /api/auth/register`.
///
/// Input is validated client-side first (`util::validate`); the service
/// still applies its own rules and its message is propagated on rejection.
///
/// # Errors
///
/// Returns [`AuthError`] with the rejection reason.
pub async fn register(request: &RegisterRequest) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&auth_url("/register"))
            .json(request)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status();
        if !resp.ok() {
            let body = resp
                .text()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            return Err(classify_register_failure(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(AuthError::Transport("not available outside the browser".to_owned()))
    }
}
