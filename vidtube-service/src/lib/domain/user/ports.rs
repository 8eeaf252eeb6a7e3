use std::path::Path;

use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::ChannelProfile;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::Profile;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateAccountCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::video::models::VideoWithOwner;

/// Port for user domain service operations: account lifecycle plus the
/// full session-token lifecycle (issuance, rotation, invalidation).
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user: hash the password, push the staged avatar and
    /// cover image to the media store, persist the record.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` / `EmailAlreadyExists` - Duplicate registration
    /// * `Media` - Avatar or cover upload failed
    /// * `DatabaseError` - Persistence failed
    async fn register(&self, command: RegisterUserCommand) -> Result<Profile, UserError>;

    /// Verify credentials and open a session.
    ///
    /// Issues an access/refresh pair and overwrites the stored refresh
    /// token. Unknown identity and wrong password are indistinguishable.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username/email or wrong password
    /// * `TokenGeneration` - Signing or token persistence failed
    async fn login(&self, credentials: Credentials) -> Result<AuthenticatedSession, UserError>;

    /// Exchange a valid refresh token for a fresh pair (single-use
    /// rotation: the old token is overwritten and permanently rejected).
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Signature/expiry check failed, or the
    ///   referenced user no longer exists
    /// * `RefreshTokenConsumed` - Token does not match the stored value
    /// * `TokenGeneration` - Signing or token persistence failed
    async fn refresh_session(&self, refresh_token: &str) -> Result<auth::TokenPair, UserError>;

    /// Clear the stored refresh token for a user, invalidating any
    /// outstanding refresh token.
    ///
    /// # Errors
    /// * `DatabaseError` - Persistence failed
    async fn logout(&self, user_id: &UserId) -> Result<(), UserError>;

    /// Change the password after verifying the old one.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `InvalidOldPassword` - Old password does not match
    async fn change_password(
        &self,
        user_id: &UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError>;

    /// Fetch the sanitized profile for a user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn get_profile(&self, user_id: &UserId) -> Result<Profile, UserError>;

    /// Update full name and email.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    async fn update_account(
        &self,
        user_id: &UserId,
        command: UpdateAccountCommand,
    ) -> Result<Profile, UserError>;

    /// Upload a new avatar from a staged file and persist its URL.
    ///
    /// # Errors
    /// * `Media` - Upload failed
    /// * `NotFound` - User does not exist
    async fn update_avatar(&self, user_id: &UserId, staged: &Path) -> Result<Profile, UserError>;

    /// Upload a new cover image from a staged file and persist its URL.
    ///
    /// # Errors
    /// * `Media` - Upload failed
    /// * `NotFound` - User does not exist
    async fn update_cover_image(
        &self,
        user_id: &UserId,
        staged: &Path,
    ) -> Result<Profile, UserError>;

    /// Channel profile for a username, with subscription figures computed
    /// relative to the viewer.
    ///
    /// # Errors
    /// * `ChannelNotFound` - No user with this username
    async fn channel_profile(
        &self,
        username: &Username,
        viewer: &UserId,
    ) -> Result<ChannelProfile, UserError>;

    /// Watch history of a user, most recent first, with owner summaries.
    ///
    /// # Errors
    /// * `DatabaseError` - Query failed
    async fn watch_history(&self, user_id: &UserId) -> Result<Vec<VideoWithOwner>, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user matching either the username or the email.
    async fn find_by_identity(&self, identity: &str) -> Result<Option<User>, UserError>;

    /// Overwrite the stored refresh token (None clears it).
    ///
    /// Single-field update: intentionally bypasses the rest of the row,
    /// mirroring the one-token-per-user overwrite semantics.
    async fn set_refresh_token(
        &self,
        id: &UserId,
        refresh_token: Option<String>,
    ) -> Result<(), UserError>;

    /// Replace the stored password hash.
    async fn set_password_hash(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;

    /// Update full name and email, returning the updated user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    async fn update_account(
        &self,
        id: &UserId,
        full_name: &str,
        email: &str,
    ) -> Result<User, UserError>;

    /// Replace the avatar URL, returning the updated user.
    async fn set_avatar_url(&self, id: &UserId, url: &str) -> Result<User, UserError>;

    /// Replace the cover image URL, returning the updated user.
    async fn set_cover_image_url(&self, id: &UserId, url: &str) -> Result<User, UserError>;

    /// Channel profile by username: explicit count and exists queries
    /// (subscriber count, subscribed-to count, viewer-is-subscribed).
    async fn channel_profile(
        &self,
        username: &Username,
        viewer: &UserId,
    ) -> Result<Option<ChannelProfile>, UserError>;

    /// Watch history joined with videos and their owner summaries.
    async fn watch_history(&self, id: &UserId) -> Result<Vec<VideoWithOwner>, UserError>;
}
