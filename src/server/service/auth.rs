//! Account lifecycle: registration, login, and password management.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        password_reset::PasswordResetRepository, profile::ProfileRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{AccountOverview, CreateUserParams, User},
    service::{mailer::Mailer, token::TokenService},
};

/// Matches the cost the account base was hashed with.
const BCRYPT_COST: u32 = 10;

const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// Parameters for creating an account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// A signed-in identity: the account plus a fresh bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and its empty profile, returning a signed-in session.
    ///
    /// # Returns
    /// - `Ok(AuthSession)`: Account created
    /// - `Err(AppError::BadRequest)`: Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        let email = params.email.trim().to_lowercase();
        let users = UserRepository::new(self.db);

        if users.email_exists(&email).await? {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        let password_hash = bcrypt::hash(&params.password, BCRYPT_COST)?;
        let user = users
            .create(CreateUserParams {
                email: email.clone(),
                password_hash,
            })
            .await?;

        ProfileRepository::new(self.db)
            .create(user.id, email, params.full_name)
            .await?;

        let token = self.tokens.issue(user.id, &user.email)?;

        Ok(AuthSession {
            user: User::from_entity(user),
            token,
        })
    }

    /// Verifies credentials and returns a signed-in session.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.id, &user.email)?;

        Ok(AuthSession {
            user: User::from_entity(user),
            token,
        })
    }

    /// Account plus profile projection for `GET /api/auth/me`.
    pub async fn account_overview(&self, user_id: Uuid) -> Result<AccountOverview, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let profile = ProfileRepository::new(self.db).find_by_id(user_id).await?;

        Ok(AccountOverview::from_entities(user, profile))
    }

    /// Stores a single-use reset token and mails the reset link.
    ///
    /// Returns `Ok` whether or not the email belongs to an account, so the
    /// endpoint cannot be used to probe for registered addresses.
    pub async fn request_password_reset(
        &self,
        email: &str,
        mailer: &Mailer,
        frontend_url: &str,
    ) -> Result<(), AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Ok(());
        };

        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);

        PasswordResetRepository::new(self.db)
            .create(user.id, token.clone(), expires_at)
            .await?;

        let reset_url = format!("{}/reset-password?token={}", frontend_url, token);
        mailer.send_password_reset(&user.email, &reset_url).await;

        Ok(())
    }

    /// Consumes a reset token and replaces the account password.
    ///
    /// # Returns
    /// - `Ok(())`: Password replaced, token marked used
    /// - `Err(AppError::BadRequest)`: Unknown, expired, or already-used token
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        let resets = PasswordResetRepository::new(self.db);

        let Some(reset) = resets.find_valid(token, Utc::now()).await? else {
            return Err(AppError::BadRequest("Invalid or expired token".to_string()));
        };

        let password_hash = bcrypt::hash(password, BCRYPT_COST)?;
        UserRepository::new(self.db)
            .update_password(reset.user_id, &password_hash)
            .await?;

        resets.mark_used(token).await?;

        Ok(())
    }

    /// Replaces the password of a signed-in user after verifying the current one.
    pub async fn update_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let users = UserRepository::new(self.db);

        let Some(user) = users.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !bcrypt::verify(current_password, &user.password_hash)? {
            return Err(AuthError::WrongCurrentPassword.into());
        }

        let password_hash = bcrypt::hash(new_password, BCRYPT_COST)?;
        users.update_password(user_id, &password_hash).await?;

        Ok(())
    }
}
