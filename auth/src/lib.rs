//! Authentication infrastructure for the vidtube platform
//!
//! Provides the building blocks of the session-token lifecycle:
//! - Password hashing (Argon2id)
//! - JWT encoding/decoding with typed claims
//! - `TokenIssuer`: access/refresh pair issuance with distinct secrets
//!
//! The service crate owns the persistence side of the lifecycle (storing
//! the current refresh token on the user record); this crate is purely
//! cryptographic and stateless.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Token pairs
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(
//!     b"access_secret_at_least_32_bytes!!",
//!     b"refresh_secret_at_least_32_bytes!",
//!     24,
//!     10,
//! );
//! let pair = issuer
//!     .issue_pair("user123", "alice", "alice@example.com")
//!     .unwrap();
//! let claims = issuer.verify_access(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::RefreshClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
