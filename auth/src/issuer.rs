use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::RefreshClaims;

/// Issues and verifies access/refresh token pairs.
///
/// Access and refresh tokens are signed with distinct secrets so that
/// leaking one never forges the other. Expiries are fixed at
/// construction from configuration: short (hours) for access, long
/// (days) for refresh.
pub struct TokenIssuer {
    access: JwtHandler,
    refresh: JwtHandler,
    access_ttl_hours: i64,
    refresh_ttl_days: i64,
}

/// A freshly issued token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `access_secret` - HS256 secret for access tokens
    /// * `refresh_secret` - HS256 secret for refresh tokens (must differ)
    /// * `access_ttl_hours` - Access token lifetime
    /// * `refresh_ttl_days` - Refresh token lifetime
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl_hours: i64,
        refresh_ttl_days: i64,
    ) -> Self {
        Self {
            access: JwtHandler::new(access_secret),
            refresh: JwtHandler::new(refresh_secret),
            access_ttl_hours,
            refresh_ttl_days,
        }
    }

    /// Issue an access/refresh pair for a user identity.
    ///
    /// The access token carries id, username, and email; the refresh
    /// token carries the id only. The caller is responsible for
    /// persisting the refresh token onto the user record.
    ///
    /// # Errors
    /// * `JwtError` - Signing failed
    pub fn issue_pair(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> Result<TokenPair, JwtError> {
        let access_claims = AccessClaims::new(user_id, username, email, self.access_ttl_hours);
        let refresh_claims = RefreshClaims::new(user_id, self.refresh_ttl_days);

        Ok(TokenPair {
            access_token: self.access.encode(&access_claims)?,
            refresh_token: self.refresh.encode(&refresh_claims)?,
        })
    }

    /// Validate an access token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - The token is past its expiry
    /// * `DecodingFailed` - Bad signature or malformed token
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.access.decode(token)
    }

    /// Validate a refresh token and return its claims.
    ///
    /// Only proves the token was issued by us and is unexpired; the
    /// exact-match check against the stored value is the caller's job.
    ///
    /// # Errors
    /// * `TokenExpired` - The token is past its expiry
    /// * `DecodingFailed` - Bad signature or malformed token
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, JwtError> {
        self.refresh.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(
            b"access_secret_at_least_32_bytes!!",
            b"refresh_secret_at_least_32_bytes!",
            24,
            10,
        )
    }

    #[test]
    fn test_issue_and_verify_pair() {
        let issuer = issuer();

        let pair = issuer
            .issue_pair("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        let access = issuer
            .verify_access(&pair.access_token)
            .expect("Access token invalid");
        assert_eq!(access.sub, "user123");
        assert_eq!(access.username, "alice");
        assert_eq!(access.email, "alice@example.com");

        let refresh = issuer
            .verify_refresh(&pair.refresh_token)
            .expect("Refresh token invalid");
        assert_eq!(refresh.sub, "user123");
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let issuer = issuer();

        let pair = issuer
            .issue_pair("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        // A refresh token must not pass access verification and vice versa
        assert!(issuer.verify_access(&pair.refresh_token).is_err());
        assert!(issuer.verify_refresh(&pair.access_token).is_err());
    }

    #[test]
    fn test_foreign_issuer_rejected() {
        let ours = issuer();
        let theirs = TokenIssuer::new(
            b"other_access_secret_32_bytes_min!",
            b"other_refresh_secret_32_bytes_m!!",
            24,
            10,
        );

        let pair = theirs
            .issue_pair("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        assert!(ours.verify_access(&pair.access_token).is_err());
        assert!(ours.verify_refresh(&pair.refresh_token).is_err());
    }

    #[test]
    fn test_refresh_tokens_rotate() {
        let issuer = issuer();

        let first = issuer
            .issue_pair("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = issuer
            .issue_pair("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        // iat has second granularity, so pairs issued across a second
        // boundary differ; exact-match rotation depends on this
        assert_ne!(first.refresh_token, second.refresh_token);
    }
}
