use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a short-lived access token.
///
/// Encodes enough identity for downstream handlers to avoid a second
/// lookup on hot paths: user id, username, and email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: String,
    pub username: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Build access claims for a user with expiry `ttl_hours` from now.
    pub fn new(
        user_id: impl ToString,
        username: impl ToString,
        email: impl ToString,
        ttl_hours: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
        }
    }
}

/// Claims carried by a longer-lived refresh token.
///
/// Deliberately minimal: the user id is all that is needed to look up the
/// stored token for the exact-match rotation check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshClaims {
    /// Subject (user identifier)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl RefreshClaims {
    /// Build refresh claims for a user with expiry `ttl_days` from now.
    pub fn new(user_id: impl ToString, ttl_days: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(ttl_days)).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_expiry() {
        let claims = AccessClaims::new("user123", "alice", "alice@example.com", 24);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_refresh_claims_expiry() {
        let claims = RefreshClaims::new("user123", 10);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 10 * 24 * 60 * 60);
    }
}
