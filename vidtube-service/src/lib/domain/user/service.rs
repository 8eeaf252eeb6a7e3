use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenPair;
use chrono::Utc;

use crate::domain::media::models::MediaKind;
use crate::domain::media::ports::MediaStore;
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
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::domain::video::models::VideoWithOwner;

/// Domain service implementation for user and session operations.
pub struct UserService<UR, MS>
where
    UR: UserRepository,
    MS: MediaStore,
{
    repository: Arc<UR>,
    media_store: Arc<MS>,
    token_issuer: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
}

impl<UR, MS> UserService<UR, MS>
where
    UR: UserRepository,
    MS: MediaStore,
{
    /// Create a new user service with injected dependencies.
    pub fn new(repository: Arc<UR>, media_store: Arc<MS>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            media_store,
            token_issuer,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Issue a fresh access/refresh pair and persist the refresh token
    /// onto the user record (overwrite, not append).
    ///
    /// Any signing or persistence failure collapses into the generic
    /// `TokenGeneration` error the callers surface.
    async fn issue_tokens(&self, user: &User) -> Result<TokenPair, UserError> {
        let pair = self
            .token_issuer
            .issue_pair(
                &user.id.to_string(),
                user.username.as_str(),
                user.email.as_str(),
            )
            .map_err(|e| {
                tracing::error!("Token signing failed for user {}: {}", user.id, e);
                UserError::TokenGeneration
            })?;

        self.repository
            .set_refresh_token(&user.id, Some(pair.refresh_token.clone()))
            .await
            .map_err(|e| {
                tracing::error!("Failed to persist refresh token for user {}: {}", user.id, e);
                UserError::TokenGeneration
            })?;

        Ok(pair)
    }
}

#[async_trait]
impl<UR, MS> UserServicePort for UserService<UR, MS>
where
    UR: UserRepository,
    MS: MediaStore,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<Profile, UserError> {
        let password_hash = match self.password_hasher.hash(&command.password) {
            Ok(hash) => hash,
            Err(e) => {
                self.media_store.discard(&command.avatar).await;
                if let Some(staged) = &command.cover_image {
                    self.media_store.discard(staged).await;
                }
                return Err(UserError::Unknown(format!("Password hashing failed: {}", e)));
            }
        };

        let avatar = match self
            .media_store
            .upload(&command.avatar, MediaKind::Image)
            .await
        {
            Ok(uploaded) => uploaded,
            Err(e) => {
                // The store removes files it attempts; the staged cover
                // never reached it.
                if let Some(staged) = &command.cover_image {
                    self.media_store.discard(staged).await;
                }
                return Err(e.into());
            }
        };

        let cover_image_url = match &command.cover_image {
            Some(staged) => Some(self.media_store.upload(staged, MediaKind::Image).await?.url),
            None => None,
        };

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            full_name: command.full_name,
            avatar_url: avatar.url,
            cover_image_url,
            password_hash,
            refresh_token: None,
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;

        Ok(Profile::from(&created))
    }

    async fn login(&self, credentials: Credentials) -> Result<AuthenticatedSession, UserError> {
        // Unknown identity and wrong password are deliberately
        // indistinguishable to the caller.
        let user = self
            .repository
            .find_by_identity(&credentials.identity)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
            .map_err(|e| UserError::Unknown(format!("Password verification failed: {}", e)))?;

        if !is_valid {
            return Err(UserError::InvalidCredentials);
        }

        let tokens = self.issue_tokens(&user).await?;

        Ok(AuthenticatedSession {
            user: Profile::from(&user),
            tokens,
        })
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<TokenPair, UserError> {
        let claims = self
            .token_issuer
            .verify_refresh(refresh_token)
            .map_err(|_| UserError::InvalidRefreshToken)?;

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| UserError::InvalidRefreshToken)?;

        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::InvalidRefreshToken)?;

        // Single-use rotation: a token that no longer matches the stored
        // value has been consumed and is rejected even if unexpired.
        match &user.refresh_token {
            Some(stored) if stored == refresh_token => {}
            _ => return Err(UserError::RefreshTokenConsumed),
        }

        self.issue_tokens(&user).await
    }

    async fn logout(&self, user_id: &UserId) -> Result<(), UserError> {
        self.repository.set_refresh_token(user_id, None).await
    }

    async fn change_password(
        &self,
        user_id: &UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id.to_string()))?;

        let is_valid = self
            .password_hasher
            .verify(&command.old_password, &user.password_hash)
            .map_err(|e| UserError::Unknown(format!("Password verification failed: {}", e)))?;

        if !is_valid {
            return Err(UserError::InvalidOldPassword);
        }

        let new_hash = self
            .password_hasher
            .hash(&command.new_password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        self.repository.set_password_hash(user_id, &new_hash).await
    }

    async fn get_profile(&self, user_id: &UserId) -> Result<Profile, UserError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .map(|user| Profile::from(&user))
            .ok_or(UserError::NotFound(user_id.to_string()))
    }

    async fn update_account(
        &self,
        user_id: &UserId,
        command: UpdateAccountCommand,
    ) -> Result<Profile, UserError> {
        let updated = self
            .repository
            .update_account(user_id, &command.full_name, command.email.as_str())
            .await?;

        Ok(Profile::from(&updated))
    }

    async fn update_avatar(&self, user_id: &UserId, staged: &Path) -> Result<Profile, UserError> {
        let uploaded = self.media_store.upload(staged, MediaKind::Image).await?;

        let updated = self
            .repository
            .set_avatar_url(user_id, &uploaded.url)
            .await?;

        Ok(Profile::from(&updated))
    }

    async fn update_cover_image(
        &self,
        user_id: &UserId,
        staged: &Path,
    ) -> Result<Profile, UserError> {
        let uploaded = self.media_store.upload(staged, MediaKind::Image).await?;

        let updated = self
            .repository
            .set_cover_image_url(user_id, &uploaded.url)
            .await?;

        Ok(Profile::from(&updated))
    }

    async fn channel_profile(
        &self,
        username: &Username,
        viewer: &UserId,
    ) -> Result<ChannelProfile, UserError> {
        self.repository
            .channel_profile(username, viewer)
            .await?
            .ok_or(UserError::ChannelNotFound(username.to_string()))
    }

    async fn watch_history(&self, user_id: &UserId) -> Result<Vec<VideoWithOwner>, UserError> {
        self.repository.watch_history(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::media::errors::MediaError;
    use crate::domain::media::models::UploadedMedia;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_identity(&self, identity: &str) -> Result<Option<User>, UserError>;
            async fn set_refresh_token(&self, id: &UserId, refresh_token: Option<String>) -> Result<(), UserError>;
            async fn set_password_hash(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;
            async fn update_account(&self, id: &UserId, full_name: &str, email: &str) -> Result<User, UserError>;
            async fn set_avatar_url(&self, id: &UserId, url: &str) -> Result<User, UserError>;
            async fn set_cover_image_url(&self, id: &UserId, url: &str) -> Result<User, UserError>;
            async fn channel_profile(&self, username: &Username, viewer: &UserId) -> Result<Option<ChannelProfile>, UserError>;
            async fn watch_history(&self, id: &UserId) -> Result<Vec<VideoWithOwner>, UserError>;
        }
    }

    mock! {
        pub TestMediaStore {}

        #[async_trait]
        impl MediaStore for TestMediaStore {
            async fn upload(&self, local_path: &Path, kind: MediaKind) -> Result<UploadedMedia, MediaError>;
            async fn discard(&self, local_path: &Path);
        }
    }

    fn issuer() -> Arc<TokenIssuer> {
        Arc::new(TokenIssuer::new(
            b"test_access_secret_32_bytes_min!!",
            b"test_refresh_secret_32_bytes_mi!!",
            1,
            10,
        ))
    }

    fn test_user(password_hash: String) -> User {
        User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            full_name: "Alice Example".to_string(),
            avatar_url: "https://media.example.com/avatar.png".to_string(),
            cover_image_url: None,
            password_hash,
            refresh_token: None,
            created_at: Utc::now(),
        }
    }

    fn register_command() -> RegisterUserCommand {
        RegisterUserCommand {
            full_name: "Alice Example".to_string(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
            avatar: PathBuf::from("/tmp/staging/avatar.png"),
            cover_image: None,
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_never_plaintext() {
        let mut repository = MockTestUserRepository::new();
        let mut media_store = MockTestMediaStore::new();

        media_store.expect_upload().times(1).returning(|_, _| {
            Ok(UploadedMedia {
                url: "https://media.example.com/avatar.png".to_string(),
                duration_secs: None,
            })
        });

        repository
            .expect_create()
            .withf(|user| {
                user.password_hash.starts_with("$argon2") && user.password_hash != "password123"
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let profile = service.register(register_command()).await.unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.avatar_url, "https://media.example.com/avatar.png");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();
        let mut media_store = MockTestMediaStore::new();

        media_store.expect_upload().times(1).returning(|_, _| {
            Ok(UploadedMedia {
                url: "https://media.example.com/avatar.png".to_string(),
                duration_secs: None,
            })
        });

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let result = service.register(register_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_register_discards_staged_cover_when_avatar_upload_fails() {
        let mut repository = MockTestUserRepository::new();
        let mut media_store = MockTestMediaStore::new();

        media_store
            .expect_upload()
            .times(1)
            .returning(|_, _| Err(MediaError::UploadFailed("service unavailable".to_string())));

        media_store
            .expect_discard()
            .withf(|path| path == Path::new("/tmp/staging/cover.png"))
            .times(1)
            .returning(|_| ());

        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let mut command = register_command();
        command.cover_image = Some(PathBuf::from("/tmp/staging/cover.png"));

        let result = service.register(command).await;
        assert!(matches!(result.unwrap_err(), UserError::Media(_)));
    }

    #[tokio::test]
    async fn test_login_success_persists_refresh_token() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();
        let token_issuer = issuer();

        let hash = PasswordHasher::new().hash("password123").unwrap();
        let user = test_user(hash);
        let user_id = user.id;

        repository
            .expect_find_by_identity()
            .with(eq("alice"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        repository
            .expect_set_refresh_token()
            .withf(move |id, token| *id == user_id && token.is_some())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(
            Arc::new(repository),
            Arc::new(media_store),
            Arc::clone(&token_issuer),
        );

        let session = service
            .login(Credentials {
                identity: "alice".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.user.username, "alice");

        let claims = token_issuer
            .verify_access(&session.tokens.access_token)
            .unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();

        let hash = PasswordHasher::new().hash("password123").unwrap();
        let user = test_user(hash);

        repository
            .expect_find_by_identity()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_set_refresh_token().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let result = service
            .login(Credentials {
                identity: "alice".to_string(),
                password: "wrong_password".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_identity() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();

        repository
            .expect_find_by_identity()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let result = service
            .login(Credentials {
                identity: "nobody".to_string(),
                password: "password123".to_string(),
            })
            .await;

        // Same error as a wrong password: no user enumeration
        assert!(matches!(result.unwrap_err(), UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_refresh_rotates_matching_token() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();
        let token_issuer = issuer();

        let mut user = test_user("$argon2id$unused".to_string());
        let pair = token_issuer
            .issue_pair(
                &user.id.to_string(),
                user.username.as_str(),
                user.email.as_str(),
            )
            .unwrap();
        user.refresh_token = Some(pair.refresh_token.clone());
        let user_id = user.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        repository
            .expect_set_refresh_token()
            .withf(move |id, token| *id == user_id && token.is_some())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(
            Arc::new(repository),
            Arc::new(media_store),
            Arc::clone(&token_issuer),
        );

        let rotated = service.refresh_session(&pair.refresh_token).await.unwrap();
        assert!(token_issuer.verify_refresh(&rotated.refresh_token).is_ok());
    }

    #[tokio::test]
    async fn test_refresh_rejects_consumed_token() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();
        let token_issuer = issuer();

        let mut user = test_user("$argon2id$unused".to_string());
        let presented = token_issuer
            .issue_pair(
                &user.id.to_string(),
                user.username.as_str(),
                user.email.as_str(),
            )
            .unwrap();
        // Stored token has already been rotated to something else
        user.refresh_token = Some("a.different.token".to_string());

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_set_refresh_token().times(0);

        let service = UserService::new(
            Arc::new(repository),
            Arc::new(media_store),
            Arc::clone(&token_issuer),
        );

        let result = service.refresh_session(&presented.refresh_token).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::RefreshTokenConsumed
        ));
    }

    #[tokio::test]
    async fn test_refresh_rejects_token_after_logout() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();
        let token_issuer = issuer();

        let mut user = test_user("$argon2id$unused".to_string());
        let presented = token_issuer
            .issue_pair(
                &user.id.to_string(),
                user.username.as_str(),
                user.email.as_str(),
            )
            .unwrap();
        // Logout cleared the stored token
        user.refresh_token = None;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_set_refresh_token().times(0);

        let service = UserService::new(
            Arc::new(repository),
            Arc::new(media_store),
            Arc::clone(&token_issuer),
        );

        let result = service.refresh_session(&presented.refresh_token).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::RefreshTokenConsumed
        ));
    }

    #[tokio::test]
    async fn test_refresh_rejects_foreign_signature() {
        let repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();

        let foreign = TokenIssuer::new(
            b"other_access_secret_32_bytes_min!",
            b"other_refresh_secret_32_bytes_m!!",
            1,
            10,
        );
        let pair = foreign
            .issue_pair(&UserId::new().to_string(), "alice", "alice@example.com")
            .unwrap();

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let result = service.refresh_session(&pair.refresh_token).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::InvalidRefreshToken
        ));
    }

    #[tokio::test]
    async fn test_logout_clears_refresh_token() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();

        let user_id = UserId::new();
        repository
            .expect_set_refresh_token()
            .withf(move |id, token| *id == user_id && token.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        service.logout(&user_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_change_password_rejects_wrong_old_password() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();

        let hash = PasswordHasher::new().hash("old_password").unwrap();
        let user = test_user(hash);
        let user_id = user.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_set_password_hash().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let result = service
            .change_password(
                &user_id,
                ChangePasswordCommand {
                    old_password: "not_the_old_password".to_string(),
                    new_password: "new_password".to_string(),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidOldPassword));
    }

    #[tokio::test]
    async fn test_change_password_stores_new_hash() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();

        let hash = PasswordHasher::new().hash("old_password").unwrap();
        let user = test_user(hash);
        let user_id = user.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        repository
            .expect_set_password_hash()
            .withf(|_, new_hash| {
                PasswordHasher::new()
                    .verify("new_password", new_hash)
                    .unwrap()
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        service
            .change_password(
                &user_id,
                ChangePasswordCommand {
                    old_password: "old_password".to_string(),
                    new_password: "new_password".to_string(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_channel_profile_unknown_channel() {
        let mut repository = MockTestUserRepository::new();
        let media_store = MockTestMediaStore::new();

        repository
            .expect_channel_profile()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = UserService::new(Arc::new(repository), Arc::new(media_store), issuer());

        let result = service
            .channel_profile(
                &Username::new("ghost".to_string()).unwrap(),
                &UserId::new(),
            )
            .await;

        assert!(matches!(result.unwrap_err(), UserError::ChannelNotFound(_)));
    }
}
