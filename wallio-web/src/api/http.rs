//! Shared request plumbing: base URL, bearer auth, and error mapping.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wallio_core::ApiErrorBody;

use crate::settings;

/// Backend base URL. Overridable at build time; defaults to same-origin
/// relative paths.
pub const BASE_URL: &str = match option_env!("WALLIO_SERVER_URL") {
    Some(url) => url,
    None => "",
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    /// Business error reported by the backend as `{"error": "..."}`.
    #[error("{0}")]
    Backend(String),
    #[error("server error: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Attach the bearer token when one is stored. Its presence is the sole
/// signal of "logged in".
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match settings::load_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = authorize(builder)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        if let Ok(body) = response.json::<ApiErrorBody>().await {
            return Err(ApiError::Backend(body.error));
        }
        return Err(ApiError::Status(status.as_u16()));
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn check(builder: RequestBuilder) -> Result<(), ApiError> {
    let response = authorize(builder)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        if let Ok(body) = response.json::<ApiErrorBody>().await {
            return Err(ApiError::Backend(body.error));
        }
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(())
}

pub async fn get<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    decode(Client::new().get(url(path)).query(query)).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    decode(Client::new().post(url(path)).json(body)).await
}

/// POST with no meaningful response body (favorite add).
pub async fn post_unit(path: &str) -> Result<(), ApiError> {
    check(Client::new().post(url(path))).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    check(Client::new().delete(url(path))).await
}
