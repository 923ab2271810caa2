//! Bearer-stamped HTTP facility for all membership API calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side: stubs
//! returning errors, since these endpoints are only meaningful in the
//! browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature page sends its traffic through these helpers and never
//! touches credentials itself. Stamping is an explicit decoration step
//! applied per request ([`authorize`]), not default state on a shared
//! client, and it reads the credential store at call time so a login or
//! logout is visible to the very next call.
//!
//! ERROR HANDLING
//! ==============
//! This layer adds a header and decodes bodies; it never reinterprets
//! failures. Transport errors, non-2xx statuses, and undecodable bodies
//! each map to their own [`ApiError`] variant and propagate to the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ApiMessage;

/// Base path of the credential-protected membership API.
pub const API_BASE: &str = "/api/v1";

/// Failure of a stamped API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network unreachable, aborted,
    /// or request construction failed). Not a statement about the session.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded as the expected type.
    #[error("could not decode response: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Header value for a present credential; `None` passes through unstamped.
#[cfg(any(test, feature = "hydrate"))]
fn authorization_header(credential: Option<&str>) -> Option<String> {
    credential.map(|token| format!("Bearer {token}"))
}

/// Map a non-2xx response body to a `Status` error, preferring the server's
/// own `{message}` payload over the raw body text.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .map(|payload| payload.message)
        .unwrap_or_else(|_| body.trim().to_owned());
    ApiError::Status { status, message }
}

/// Attach the current credential, if any, to an outbound request.
#[cfg(feature = "hydrate")]
fn authorize(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let credential = crate::util::credential_store::load().map(|(token, _)| token);
    match authorization_header(credential.as_deref()) {
        Some(value) => request.header("Authorization", &value),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Stamped `GET` returning a decoded JSON body.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or decode
/// failure.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(not_in_browser())
    }
}

/// Stamped `POST` where only success matters; the response body is
/// discarded.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or non-2xx status.
pub async fn post_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            return Err(status_error(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(not_in_browser())
    }
}

/// Stamped bodiless `POST` (action endpoints like connect/register).
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or decode
/// failure.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(not_in_browser())
    }
}

/// Stamped `DELETE`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or decode
/// failure.
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(not_in_browser())
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}
