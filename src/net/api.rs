//! REST API calls for authentication, the message feed, and profiles.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the installed
//! bearer credential attached to every request.
//! Server-side (SSR): stubs returning `ApiError::Network`, since these
//! endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{AuthResponse, Message, Profile};
#[cfg(feature = "hydrate")]
use super::types::messages_from_value;

#[cfg(feature = "hydrate")]
fn authorize(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match super::credential::bearer_header() {
        Some(header) => request.header("Authorization", &header),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
async fn rejection(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.json::<serde_json::Value>().await.ok();
    ApiError::from_response(status, body.as_ref())
}

#[cfg(feature = "hydrate")]
async fn post_credentials(path: &str, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let response = authorize(gloo_net::http::Request::post(path))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on the server".to_owned()))
}

/// Create an account via `POST /api/register/`. A successful registration
/// returns a token, so the caller signs the user in directly.
///
/// # Errors
///
/// `ApiError` on transport failure or server rejection (e.g. a taken
/// username, reported through the `detail` string).
pub async fn register(username: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("/api/register/", username, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        server_stub()
    }
}

/// Exchange a username/password pair for a token via `POST /api/login/`.
///
/// # Errors
///
/// `ApiError` on transport failure or rejected credentials.
pub async fn login(username: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials("/api/login/", username, password).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        server_stub()
    }
}

/// Fetch the message feed via `GET /api/messages/`.
///
/// A body that is not a JSON array decodes as an empty feed.
///
/// # Errors
///
/// `ApiError::AuthExpired` on 401, otherwise `ApiError` per class.
pub async fn fetch_messages() -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorize(gloo_net::http::Request::get("/api/messages/"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(rejection(response).await);
        }
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(messages_from_value(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Send a message via `POST /api/messages/` and return the server-persisted
/// copy.
///
/// # Errors
///
/// `ApiError` on transport failure or rejection (empty/too-long text).
pub async fn send_message(text: &str) -> Result<Message, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorize(gloo_net::http::Request::post("/api/messages/"))
            .json(&serde_json::json!({ "text": text }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(rejection(response).await);
        }
        response
            .json::<Message>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        server_stub()
    }
}

/// Fetch the authenticated member's profile via `GET /api/profile/`.
///
/// # Errors
///
/// `ApiError::AuthExpired` on 401, otherwise `ApiError` per class.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorize(gloo_net::http::Request::get("/api/profile/"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(rejection(response).await);
        }
        response
            .json::<Profile>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}
