use crate::{
    domain::{
        shared::errors::ApiError,
        user::{
            credentials::SessionStore,
            entity::{AccountNotice, UserAccount},
            repository::AccountRepository,
            value_objects::{
                EmailVerification, LoginCredentials, PasswordChange, PasswordResetConfirm,
                PasswordResetRequest, ProfileUpdate, Registration,
            },
        },
    },
    infrastructure::notify::traits::{Notification, Notifier},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Login, sign-up, profile and password flows of the account pages.
///
/// Form input is validated before any request is sent. A rejected credential
/// clears the stored session so the next authenticated call fails locally as
/// `Unauthenticated` instead of hitting the backend again. Every user-facing
/// flow reports its outcome through the notifier.
pub struct AccountUseCase {
    repository: Box<dyn AccountRepository>,
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
}

/// Text shown when the backend confirms without a message of its own.
fn notice_or(notice: &AccountNotice, fallback: &str) -> String {
    notice
        .message
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}

impl AccountUseCase {
    pub fn new(
        repository: Box<dyn AccountRepository>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            session,
            notifier,
        }
    }

    pub async fn login(&self, username: String, password: String) -> Result<(), ApiError> {
        let result = match LoginCredentials::new(username, password) {
            Ok(credentials) => match self.repository.login(&credentials).await {
                Ok(tokens) => {
                    self.session.store(tokens);
                    info!(username = %credentials.username, "logged in");
                    Ok(())
                }
                Err(err) => {
                    warn!(username = %credentials.username, error = %err, "login failed");
                    Err(err)
                }
            },
            Err(errors) => Err(errors.into()),
        };
        self.report(result, "Login Failed", |_| {
            Notification::success("Login Successful!", "Welcome back.")
        })
    }

    pub fn logout(&self) {
        self.session.clear();
        info!("logged out");
    }

    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
        password2: String,
        first_name: String,
        last_name: String,
    ) -> Result<AccountNotice, ApiError> {
        let result = match Registration::new(
            username, email, password, password2, first_name, last_name,
        ) {
            Ok(registration) => {
                let result = self.repository.register(&registration).await;
                if result.is_ok() {
                    info!(username = %registration.username, "registered");
                }
                result
            }
            Err(errors) => Err(errors.into()),
        };
        self.report(result, "Registration Failed", |notice| {
            Notification::success(
                "Registration Successful",
                notice_or(notice, "Please check your email to verify your account."),
            )
        })
    }

    pub async fn verify_email(&self, token: String) -> Result<AccountNotice, ApiError> {
        let result = match EmailVerification::new(token) {
            Ok(verification) => self.repository.verify_email(&verification).await,
            Err(errors) => Err(errors.into()),
        };
        self.report(result, "Verification Failed", |notice| {
            Notification::success("Email Verified", notice_or(notice, "You can now log in."))
        })
    }

    /// Asks for a reset link. The backend answers the same way whether or not
    /// the address belongs to an account.
    pub async fn request_password_reset(&self, email: String) -> Result<AccountNotice, ApiError> {
        let result = match PasswordResetRequest::new(email) {
            Ok(request) => self.repository.request_password_reset(&request).await,
            Err(errors) => Err(errors.into()),
        };
        self.report(result, "Reset Request Failed", |notice| {
            Notification::success(
                "Check Your Email",
                notice_or(
                    notice,
                    "If an account with this email exists, a password reset link has been sent.",
                ),
            )
        })
    }

    pub async fn confirm_password_reset(
        &self,
        uid: String,
        token: String,
        password: String,
    ) -> Result<AccountNotice, ApiError> {
        let result = match PasswordResetConfirm::new(uid, token, password) {
            Ok(confirm) => self.repository.confirm_password_reset(&confirm).await,
            Err(errors) => Err(errors.into()),
        };
        self.report(result, "Password Reset Failed", |notice| {
            Notification::success(
                "Password Reset",
                notice_or(notice, "You can now log in with your new password."),
            )
        })
    }

    /// Trades the stored refresh token for a new access token.
    ///
    /// Keeps the old refresh token when the backend does not rotate it. A
    /// rejected refresh token ends the session.
    pub async fn refresh_session(&self) -> Result<(), ApiError> {
        let Some(refresh) = self.session.tokens().and_then(|tokens| tokens.refresh) else {
            return Err(ApiError::Unauthenticated);
        };
        match self.repository.refresh_token(&refresh).await {
            Ok(mut tokens) => {
                tokens.refresh.get_or_insert(refresh);
                self.session.store(tokens);
                info!("access token refreshed");
                Ok(())
            }
            Err(ApiError::RequestFailed {
                status: Some(401), ..
            }) => {
                warn!("refresh token rejected, clearing stored credential");
                self.session.clear();
                Err(ApiError::SessionExpired)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn current_user(&self) -> Result<UserAccount, ApiError> {
        let result = self.repository.current_user().await;
        self.guard_session(result)
    }

    pub async fn update_profile(
        &self,
        first_name: String,
        last_name: String,
    ) -> Result<UserAccount, ApiError> {
        let result = match ProfileUpdate::new(first_name, last_name) {
            Ok(update) => {
                let result = self.repository.update_profile(&update).await;
                self.guard_session(result)
            }
            Err(errors) => Err(errors.into()),
        };
        self.report(result, "Update Failed", |_| {
            Notification::success(
                "Profile Updated",
                "Your profile information has been successfully updated.",
            )
        })
    }

    pub async fn change_password(
        &self,
        old_password: String,
        new_password1: String,
        new_password2: String,
    ) -> Result<(), ApiError> {
        let result = match PasswordChange::new(old_password, new_password1, new_password2) {
            Ok(change) => {
                let result = self.repository.change_password(&change).await;
                self.guard_session(result)
            }
            Err(errors) => Err(errors.into()),
        };
        if result.is_ok() {
            info!("password changed");
        }
        self.report(result, "Password Change Failed", |_| {
            Notification::success("Success", "Your password has been changed successfully.")
        })
    }

    fn guard_session<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::SessionExpired) = &result {
            warn!("session expired, clearing stored credential");
            self.session.clear();
        }
        result
    }

    fn report<T, S>(
        &self,
        result: Result<T, ApiError>,
        failure_title: &str,
        success: S,
    ) -> Result<T, ApiError>
    where
        S: FnOnce(&T) -> Notification,
    {
        let notification = match &result {
            Ok(value) => success(value),
            Err(err) => Notification::error(failure_title, err.user_message()),
        };
        self.notifier.notify(notification);
        result
    }
}
