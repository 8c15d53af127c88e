//! Authentication models
//!
//! Data structures for operators, JWT payloads, and the per-request
//! authentication context.

use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use pollbook_persistence::entity::operators;

// Auth configuration keys
pub const TOKEN_SECRET_KEY: &str = "pollbook.auth.token.secret.key";
pub const TOKEN_EXPIRE_SECONDS: &str = "pollbook.auth.token.expire.seconds";

/// Default token lifetime: 18 hours, the length of an election-day shift.
/// These are bearer credentials for a closed poll-station network, not
/// short-lived API tokens; there is no revocation list, only expiry.
pub const DEFAULT_TOKEN_EXPIRE_SECONDS: i64 = 18 * 60 * 60;

/// Basic operator information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub username: String,
    pub password: String,
}

impl From<operators::Model> for Operator {
    fn from(value: operators::Model) -> Self {
        Self {
            username: value.username,
            password: value.password,
        }
    }
}

/// JWT payload carried by session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtPayload {
    /// Operator username
    pub sub: String,
    /// Absolute expiry, unix seconds
    pub exp: i64,
}

/// Per-request authentication state, filled in by the middleware and
/// inspected by the `authenticated!` macro.
#[derive(Debug, Default)]
pub struct AuthContext {
    pub username: String,
    pub jwt_error: Option<jsonwebtoken::errors::Error>,
    pub token_provided: bool,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn jwt_error_string(&self) -> String {
        if let Some(e) = &self.jwt_error {
            match e.kind() {
                ErrorKind::ExpiredSignature => "token expired!".to_string(),
                _ => e.to_string(),
            }
        } else {
            String::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_context_default() {
        let ctx = AuthContext::default();
        assert!(!ctx.is_authenticated());
        assert!(ctx.jwt_error.is_none());
        assert_eq!(ctx.jwt_error_string(), "");
    }

    #[test]
    fn test_default_token_ttl_is_shift_length() {
        assert_eq!(DEFAULT_TOKEN_EXPIRE_SECONDS, 64800);
    }
}
