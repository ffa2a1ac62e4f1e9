//! Token-expiry inspection for the auth session.
//!
//! The bearer token is opaque to the client except for the expiry embedded
//! in its JWT-shaped payload. A watchdog in the web crate checks it on
//! [`EXPIRY_CHECK_INTERVAL`] and clears the session (memory and persisted
//! storage both) once it has passed.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use thiserror::Error;

/// How often the session watchdog re-checks the stored token.
pub const EXPIRY_CHECK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("token is not in header.payload.signature form")]
    Malformed,
    #[error("token payload is not valid base64: {0}")]
    Encoding(String),
    #[error("token payload is not valid JSON: {0}")]
    Payload(String),
    #[error("token payload carries no expiry claim")]
    MissingExpiry,
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Decode the expiry instant embedded in the token.
pub fn token_expiry(token: &str) -> Result<DateTime<Utc>, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::Malformed)?;
    if payload.is_empty() || token.split('.').count() != 3 {
        return Err(TokenError::Malformed);
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Payload(e.to_string()))?;
    let exp = claims.exp.ok_or(TokenError::MissingExpiry)?;
    Utc.timestamp_opt(exp, 0)
        .single()
        .ok_or(TokenError::MissingExpiry)
}

/// Whether the token should be treated as expired at `now`. A token whose
/// expiry cannot be read counts as expired; holding on to an unreadable
/// credential only delays the inevitable 401.
pub fn token_expired(token: &str, now: DateTime<Utc>) -> bool {
    match token_expiry(token) {
        Ok(expiry) => expiry <= now,
        Err(err) => {
            tracing::warn!(%err, "treating undecodable token as expired");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token_with_exp(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!("{{\"sub\":\"1\",\"exp\":{exp}}}"));
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
    }

    #[test]
    fn decodes_the_embedded_expiry() {
        let exp = Utc::now().timestamp() + 3600;
        let expiry = token_expiry(&token_with_exp(exp)).unwrap();
        assert_eq!(expiry.timestamp(), exp);
    }

    #[test]
    fn future_expiry_is_not_expired() {
        let now = Utc::now();
        let token = token_with_exp((now + Duration::hours(1)).timestamp());
        assert!(!token_expired(&token, now));
    }

    #[test]
    fn past_expiry_is_expired() {
        let now = Utc::now();
        let token = token_with_exp((now - Duration::minutes(1)).timestamp());
        assert!(token_expired(&token, now));
    }

    #[test]
    fn malformed_tokens_count_as_expired() {
        assert_eq!(token_expiry("no-dots-here"), Err(TokenError::Malformed));
        assert!(token_expired("no-dots-here", Utc::now()));
        assert!(token_expired("a.%%%.c", Utc::now()));
    }

    #[test]
    fn payload_without_exp_claim_is_rejected() {
        let payload = URL_SAFE_NO_PAD.encode("{\"sub\":\"1\"}");
        let token = format!("h.{payload}.s");
        assert_eq!(token_expiry(&token), Err(TokenError::MissingExpiry));
    }
}
