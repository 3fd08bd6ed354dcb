//! Session token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session token lifetime (24 hours)
pub const SESSION_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Claims structure for the session token payload
///
/// The token is self-contained: validity is re-derived from these claims and
/// the signing secret on every use. There is no server-side session record
/// and no revocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp (epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (epoch seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a session token
    pub fn new_session_token(user_id: Uuid, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(ttl_hours);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_session_token(user_id, SESSION_TOKEN_EXPIRY_HOURS);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, SESSION_TOKEN_EXPIRY_HOURS * 3600);
        assert!(!claims.is_expired());
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_expired_claims() {
        let mut claims = Claims::new_session_token(Uuid::new_v4(), 24);
        claims.exp = Utc::now().timestamp() - 60;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_user_id_rejects_garbage_subject() {
        let mut claims = Claims::new_session_token(Uuid::new_v4(), 24);
        claims.sub = "not-a-uuid".to_string();
        assert!(claims.user_id().is_err());
    }
}
