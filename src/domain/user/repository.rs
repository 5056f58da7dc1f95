use super::entity::{AccountNotice, TokenPair, UserAccount};
use super::value_objects::{
    EmailVerification, LoginCredentials, PasswordChange, PasswordResetConfirm,
    PasswordResetRequest, ProfileUpdate, Registration,
};
use crate::domain::shared::errors::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair, ApiError>;
    async fn register(&self, registration: &Registration) -> Result<AccountNotice, ApiError>;
    async fn verify_email(&self, verification: &EmailVerification)
    -> Result<AccountNotice, ApiError>;
    async fn request_password_reset(
        &self,
        request: &PasswordResetRequest,
    ) -> Result<AccountNotice, ApiError>;
    async fn confirm_password_reset(
        &self,
        confirm: &PasswordResetConfirm,
    ) -> Result<AccountNotice, ApiError>;
    /// Exchanges a refresh token for a new access token.
    async fn refresh_token(&self, refresh: &str) -> Result<TokenPair, ApiError>;
    async fn current_user(&self) -> Result<UserAccount, ApiError>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserAccount, ApiError>;
    async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError>;
}
