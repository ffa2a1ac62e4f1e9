//! Google OAuth endpoints.

use wallio_core::{AuthResponse, AuthUrlResponse};

use super::http::{self, ApiError};

pub async fn get_google_auth_url() -> Result<String, ApiError> {
    let response: AuthUrlResponse = http::get("/auth/google", &[]).await?;
    Ok(response.auth_url)
}

pub async fn google_callback(code: &str, state: &str) -> Result<AuthResponse, ApiError> {
    http::get(
        "/auth/google/callback",
        &[("code", code.to_string()), ("state", state.to_string())],
    )
    .await
}
