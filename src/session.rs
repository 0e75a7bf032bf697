//! Bearer-token session bookkeeping.
//!
//! The auth service issues JWTs; this layer only reads the expiry claim
//! to drive warnings and logout timing. Signature verification is the
//! service's job, so tokens are decoded without it, and an unreadable
//! token is simply treated as expired.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Seconds before expiry at which a session warning should be shown.
pub const EXPIRY_WARNING_SECS: i64 = 5 * 60;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// State of a session as derived from its token's expiry claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More than the warning window remains.
    Active,
    /// Inside the warning window; the user should be prompted to refresh.
    ExpiringSoon {
        /// Time left before the token expires.
        remaining: Duration,
    },
    /// The token has expired (or could not be read).
    Expired,
}

/// Read the expiry instant from a token without verifying its signature.
pub fn token_expiry(token: &str) -> Result<DateTime<Utc>> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    // Expired tokens must still decode; timing is handled here.
    validation.validate_exp = false;

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| Error::Token(e.to_string()))?;

    DateTime::from_timestamp(data.claims.exp, 0)
        .ok_or_else(|| Error::Token("expiry timestamp out of range".to_string()))
}

/// Check whether a token is expired. A token that cannot be decoded
/// counts as expired.
pub fn is_token_expired(token: &str) -> bool {
    match token_expiry(token) {
        Ok(expiry) => expiry <= Utc::now(),
        Err(_) => true,
    }
}

/// Time remaining until the token expires, clamped at zero.
pub fn time_remaining(token: &str) -> Duration {
    match token_expiry(token) {
        Ok(expiry) => (expiry - Utc::now()).max(Duration::zero()),
        Err(_) => Duration::zero(),
    }
}

/// Classify a token against the warning window.
pub fn session_state(token: &str) -> SessionState {
    let remaining = time_remaining(token);
    if remaining <= Duration::zero() {
        SessionState::Expired
    } else if remaining.num_seconds() <= EXPIRY_WARNING_SECS {
        SessionState::ExpiringSoon { remaining }
    } else {
        SessionState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        exp: i64,
        sub: String,
    }

    fn make_token(expires_in_secs: i64) -> String {
        let claims = TestClaims {
            exp: (Utc::now() + Duration::seconds(expires_in_secs)).timestamp(),
            sub: "user@example.com".to_string(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_token_expiry_reads_exp_claim() {
        let token = make_token(3600);
        let expiry = token_expiry(&token).unwrap();
        let remaining = expiry - Utc::now();
        assert!(remaining.num_seconds() > 3500 && remaining.num_seconds() <= 3600);
    }

    #[test]
    fn test_expired_token_detected() {
        let token = make_token(-60);
        assert!(is_token_expired(&token));
        assert_eq!(time_remaining(&token), Duration::zero());
        assert_eq!(session_state(&token), SessionState::Expired);
    }

    #[test]
    fn test_active_token() {
        let token = make_token(3600);
        assert!(!is_token_expired(&token));
        assert_eq!(session_state(&token), SessionState::Active);
    }

    #[test]
    fn test_warning_window() {
        let token = make_token(120);
        match session_state(&token) {
            SessionState::ExpiringSoon { remaining } => {
                assert!(remaining.num_seconds() <= 120);
            }
            other => panic!("expected warning state, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token_counts_as_expired() {
        assert!(is_token_expired("not-a-token"));
        assert_eq!(session_state(""), SessionState::Expired);
        assert!(token_expiry("a.b.c").is_err());
    }
}
