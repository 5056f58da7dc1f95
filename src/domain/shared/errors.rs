use thiserror::Error;

/// Failure talking to the platform backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No credential is available; the request never left the client.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The backend rejected the credential (401).
    #[error("Session expired")]
    SessionExpired,

    /// Any other non-success response, or a payload that failed validation.
    #[error("{message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
        details: Vec<String>,
    },

    /// Network failure before a response was received.
    #[error("{0}")]
    Transport(String),

    /// Input rejected locally before any request was issued.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Payload that did not match the expected shape.
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        Self::request_failed(None, format!("Malformed response: {}", reason))
    }

    /// Whether the caller should send the user back through login.
    pub fn needs_reauthentication(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::SessionExpired)
    }

    /// Message plus any backend-provided details, ready for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::RequestFailed {
                message, details, ..
            } if !details.is_empty() => format!("{}: {}", message, details.join(" ")),
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let msg = error.message.as_ref().map_or_else(
                    || format!("Field '{}' is invalid", field),
                    |m| m.to_string(),
                );
                messages.push(msg);
            }
        }
        messages.sort();
        ApiError::Validation(messages.join(" "))
    }
}
