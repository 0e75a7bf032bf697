//! Auth service request and response shapes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
}

/// Raw response from the login and signup endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Whether the request was accepted.
    #[serde(default)]
    pub success: bool,

    /// Issued bearer token, empty on failure.
    #[serde(default)]
    pub token: String,

    /// User record as returned by the service, kept opaque.
    #[serde(default)]
    pub user: serde_json::Value,
}

/// An established session: the token plus the user record it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub token: String,

    /// Opaque user record.
    pub user: serde_json::Value,
}

/// Convert an accepted auth response into a session, rejecting responses
/// the service itself marked unsuccessful.
pub(crate) fn into_session(response: AuthResponse) -> Result<AuthSession> {
    if !response.success || response.token.is_empty() {
        return Err(Error::Auth("credentials were not accepted".to_string()));
    }
    Ok(AuthSession {
        token: response.token,
        user: response.user,
    })
}
