use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^\w+$").unwrap();
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginCredentials {
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: String, password: String) -> Result<Self, validator::ValidationErrors> {
        let credentials = Self {
            username: username.trim().to_string(),
            password,
        };
        credentials.validate()?;
        Ok(credentials)
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Editable part of the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(max = 150, message = "First name is too long."))]
    pub first_name: String,
    #[validate(length(max = 150, message = "Last name is too long."))]
    pub last_name: String,
}

impl ProfileUpdate {
    pub fn new(first_name: String, last_name: String) -> Result<Self, validator::ValidationErrors> {
        let update = Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        };
        update.validate()?;
        Ok(update)
    }
}

/// Password change form, checked locally before it is submitted.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct PasswordChange {
    #[validate(length(min = 1, message = "Current password is required."))]
    pub old_password: String,
    #[validate(length(min = 8, message = "New password must be at least 8 characters."))]
    pub new_password1: String,
    #[validate(must_match(other = "new_password1", message = "New passwords do not match."))]
    pub new_password2: String,
}

impl PasswordChange {
    pub fn new(
        old_password: String,
        new_password1: String,
        new_password2: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let change = Self {
            old_password,
            new_password1,
            new_password2,
        };
        change.validate()?;
        Ok(change)
    }
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordChange { .. }")
    }
}

/// Sign-up form.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Registration {
    #[validate(
        length(min = 3, message = "Username must be at least 3 characters long."),
        regex(
            path = *USERNAME_REGEX,
            message = "Username can only contain letters, numbers, and underscores."
        )
    )]
    pub username: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Password fields didn't match."))]
    pub password2: String,
    #[validate(length(max = 150, message = "First name is too long."))]
    pub first_name: String,
    #[validate(length(max = 150, message = "Last name is too long."))]
    pub last_name: String,
}

impl Registration {
    pub fn new(
        username: String,
        email: String,
        password: String,
        password2: String,
        first_name: String,
        last_name: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let registration = Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password,
            password2,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        };
        registration.validate()?;
        Ok(registration)
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Token from the link in the verification email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmailVerification {
    #[validate(length(min = 1, message = "Token is required."))]
    pub token: String,
}

impl EmailVerification {
    pub fn new(token: String) -> Result<Self, validator::ValidationErrors> {
        let verification = Self {
            token: token.trim().to_string(),
        };
        verification.validate()?;
        Ok(verification)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
}

impl PasswordResetRequest {
    pub fn new(email: String) -> Result<Self, validator::ValidationErrors> {
        let request = Self {
            email: email.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}

/// New password submitted from a reset link carrying `uid` and `token`.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetConfirm {
    #[validate(length(min = 1, message = "UID, token, and new password are required."))]
    pub uid: String,
    #[validate(length(min = 1, message = "UID, token, and new password are required."))]
    pub token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
}

impl PasswordResetConfirm {
    pub fn new(
        uid: String,
        token: String,
        password: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let confirm = Self {
            uid: uid.trim().to_string(),
            token: token.trim().to_string(),
            password,
        };
        confirm.validate()?;
        Ok(confirm)
    }
}

impl std::fmt::Debug for PasswordResetConfirm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordResetConfirm")
            .field("uid", &self.uid)
            .finish_non_exhaustive()
    }
}
