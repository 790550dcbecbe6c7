use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ApiError;
use crate::state::{AppState, Credentials};

/// Authenticated consultant, available to handlers as an extension.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

/// HTTP Basic authentication against the single configured account.
///
/// On success, inserts [`AuthUser`] into request extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| check_basic(v, &state.credentials))
        .ok_or_else(|| {
            tracing::warn!(path = %req.uri().path(), "rejected credentials");
            ApiError::Unauthorized
        })?;

    req.extensions_mut().insert(AuthUser { username });

    Ok(next.run(req).await)
}

/// Decode a `Basic` authorization header and return the username if the
/// credentials match.
fn check_basic(header_value: &str, credentials: &Credentials) -> Option<String> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;

    let user_ok = constant_time_eq(user.as_bytes(), credentials.username.as_bytes());
    let pass_ok = constant_time_eq(pass.as_bytes(), credentials.password.as_bytes());
    (user_ok & pass_ok).then(|| user.to_string())
}

/// Byte comparison whose running time does not depend on where the inputs
/// first differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}
