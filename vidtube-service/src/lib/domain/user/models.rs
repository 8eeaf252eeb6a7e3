use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// User aggregate entity.
///
/// Carries the credential fields (password hash, current refresh token);
/// anything leaving the domain goes through [`Profile`] instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub full_name: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
    pub password_hash: String,
    /// The single currently-valid refresh token; None when logged out.
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures the username is 3-32 characters of alphanumerics, underscore,
/// or hyphen. Stored lowercased so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username.to_lowercase()))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.len();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using an RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Sanitized user projection: everything except the password hash and
/// refresh token. The only user shape handlers ever see or serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            full_name: user.full_name.clone(),
            avatar_url: user.avatar_url.clone(),
            cover_image_url: user.cover_image_url.clone(),
            created_at: user.created_at,
        }
    }
}

/// Compact user projection embedded in videos, comments, and tweets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub avatar_url: String,
}

/// Command to register a new user.
///
/// Files arrive staged on local disk; the service pushes them to the
/// media store before the user row is created.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub full_name: String,
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub avatar: PathBuf,
    pub cover_image: Option<PathBuf>,
}

/// Login credentials: a username or an email, plus the password.
#[derive(Debug)]
pub struct Credentials {
    pub identity: String,
    pub password: String,
}

/// Result of a successful login: the sanitized user plus both tokens.
#[derive(Debug)]
pub struct AuthenticatedSession {
    pub user: Profile,
    pub tokens: auth::TokenPair,
}

#[derive(Debug)]
pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password: String,
}

/// Account update: both fields are required, matching the API contract.
#[derive(Debug)]
pub struct UpdateAccountCommand {
    pub full_name: String,
    pub email: EmailAddress,
}

/// Channel profile: public user fields plus subscription figures,
/// computed relative to the viewing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelProfile {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
    pub subscriber_count: i64,
    pub subscribed_to_count: i64,
    /// Whether the viewer is subscribed to this channel
    pub is_subscribed: bool,
}
