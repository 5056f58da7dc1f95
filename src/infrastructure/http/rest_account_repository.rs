use super::api_client::{ApiClient, AuthMode};
use crate::domain::shared::errors::ApiError;
use crate::domain::user::{
    entity::{AccountNotice, TokenPair, UserAccount},
    repository::AccountRepository,
    value_objects::{
        EmailVerification, LoginCredentials, PasswordChange, PasswordResetConfirm,
        PasswordResetRequest, ProfileUpdate, Registration,
    },
};
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const LOGIN_PATH: &str = "auth/login/";
const REGISTER_PATH: &str = "auth/register/";
const VERIFY_EMAIL_PATH: &str = "auth/verify-email/";
const PASSWORD_RESET_REQUEST_PATH: &str = "auth/password-reset/request/";
const PASSWORD_RESET_CONFIRM_PATH: &str = "auth/password-reset/confirm/";
const TOKEN_REFRESH_PATH: &str = "auth/token/refresh/";
const CURRENT_USER_PATH: &str = "users/me/";
const PASSWORD_CHANGE_PATH: &str = "auth/password/change/";

pub struct RestAccountRepository {
    client: Arc<ApiClient>,
}

#[derive(Serialize)]
struct RefreshBody<'a> {
    refresh: &'a str,
}

impl RestAccountRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Posts `body` without a credential and reads the confirmation message.
    async fn post_anonymous<B>(&self, path: &str, body: &B) -> Result<AccountNotice, ApiError>
    where
        B: Serialize + Sync,
    {
        let url = self.client.endpoint(path)?;
        let notice: Option<AccountNotice> = self
            .client
            .send(Method::POST, url, body, AuthMode::Anonymous)
            .await?;
        Ok(notice.unwrap_or_default())
    }
}

#[async_trait]
impl AccountRepository for RestAccountRepository {
    async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair, ApiError> {
        let url = self.client.endpoint(LOGIN_PATH)?;
        self.client
            .send(Method::POST, url, credentials, AuthMode::Anonymous)
            .await
    }

    async fn register(&self, registration: &Registration) -> Result<AccountNotice, ApiError> {
        self.post_anonymous(REGISTER_PATH, registration).await
    }

    async fn verify_email(
        &self,
        verification: &EmailVerification,
    ) -> Result<AccountNotice, ApiError> {
        self.post_anonymous(VERIFY_EMAIL_PATH, verification).await
    }

    async fn request_password_reset(
        &self,
        request: &PasswordResetRequest,
    ) -> Result<AccountNotice, ApiError> {
        self.post_anonymous(PASSWORD_RESET_REQUEST_PATH, request).await
    }

    async fn confirm_password_reset(
        &self,
        confirm: &PasswordResetConfirm,
    ) -> Result<AccountNotice, ApiError> {
        self.post_anonymous(PASSWORD_RESET_CONFIRM_PATH, confirm).await
    }

    async fn refresh_token(&self, refresh: &str) -> Result<TokenPair, ApiError> {
        let url = self.client.endpoint(TOKEN_REFRESH_PATH)?;
        self.client
            .send(Method::POST, url, &RefreshBody { refresh }, AuthMode::Anonymous)
            .await
    }

    async fn current_user(&self) -> Result<UserAccount, ApiError> {
        let url = self.client.endpoint(CURRENT_USER_PATH)?;
        self.client.get(url, AuthMode::Required).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserAccount, ApiError> {
        let url = self.client.endpoint(CURRENT_USER_PATH)?;
        self.client
            .send(Method::PATCH, url, update, AuthMode::Required)
            .await
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let url = self.client.endpoint(PASSWORD_CHANGE_PATH)?;
        let _: Option<Value> = self
            .client
            .send(Method::POST, url, change, AuthMode::Required)
            .await?;
        Ok(())
    }
}
