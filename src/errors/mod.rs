//! Error handling module for the Agora client.
//!
//! Provides the centralized error taxonomy with stable codes so each rejected
//! action can be shown to the user as its own message.

use reqwest::StatusCode;

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const ALREADY_REPORTED: &str = "ALREADY_REPORTED";
    pub const ACCOUNT_BANNED: &str = "ACCOUNT_BANNED";
    pub const QUOTA_EXCEEDED: &str = "QUOTA_EXCEEDED";
    pub const MISSING_FEEDBACK: &str = "MISSING_FEEDBACK";
    pub const PAYMENT_ERROR: &str = "PAYMENT_ERROR";
    pub const REMOTE_ERROR: &str = "REMOTE_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

/// Client error type.
#[derive(Debug)]
pub enum ApiError {
    /// Network or connection failure before a response arrived
    Transport(String),
    /// Credential rejected by the remote store; the session is terminated
    Unauthorized(String),
    /// Signed in but not allowed to perform the action
    Forbidden(String),
    /// Entity missing (possibly deleted concurrently)
    NotFound(String),
    /// Request rejected as malformed or incomplete
    Validation(String),
    /// Report attempted on a comment that is already reported
    AlreadyReported(String),
    /// Write attempted by a banned account
    Banned(String),
    /// Bronze-tier post quota reached
    QuotaExceeded { message: String, post_count: i64 },
    /// Report attempted without a feedback classification
    MissingFeedback(String),
    /// Payment intent was not confirmed successfully
    Payment(String),
    /// Remote store failed with an unexpected status
    Remote { message: String, status: u16 },
    /// Response body could not be decoded
    Decode(String),
}

impl ApiError {
    /// Get the stable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => codes::TRANSPORT_ERROR,
            ApiError::Unauthorized(_) => codes::UNAUTHORIZED,
            ApiError::Forbidden(_) => codes::FORBIDDEN,
            ApiError::NotFound(_) => codes::NOT_FOUND,
            ApiError::Validation(_) => codes::VALIDATION_ERROR,
            ApiError::AlreadyReported(_) => codes::ALREADY_REPORTED,
            ApiError::Banned(_) => codes::ACCOUNT_BANNED,
            ApiError::QuotaExceeded { .. } => codes::QUOTA_EXCEEDED,
            ApiError::MissingFeedback(_) => codes::MISSING_FEEDBACK,
            ApiError::Payment(_) => codes::PAYMENT_ERROR,
            ApiError::Remote { .. } => codes::REMOTE_ERROR,
            ApiError::Decode(_) => codes::DECODE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport(msg) => msg.clone(),
            ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::Forbidden(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Validation(msg) => msg.clone(),
            ApiError::AlreadyReported(msg) => msg.clone(),
            ApiError::Banned(msg) => msg.clone(),
            ApiError::QuotaExceeded { message, .. } => message.clone(),
            ApiError::MissingFeedback(msg) => msg.clone(),
            ApiError::Payment(msg) => msg.clone(),
            ApiError::Remote { message, .. } => message.clone(),
            ApiError::Decode(msg) => msg.clone(),
        }
    }

    /// Whether this is a business-rule rejection rather than an infrastructure
    /// failure. Business rejections are shown inline on the triggering action.
    pub fn is_business_rejection(&self) -> bool {
        matches!(
            self,
            ApiError::AlreadyReported(_)
                | ApiError::Banned(_)
                | ApiError::QuotaExceeded { .. }
                | ApiError::MissingFeedback(_)
                | ApiError::Validation(_)
        )
    }

    /// Map a non-success HTTP status from the remote store to an error.
    ///
    /// 401 is handled by the transport before this point (session
    /// termination); it is mapped here as well so the conversion is total.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            s if s.is_client_error() => ApiError::Validation(message),
            s => ApiError::Remote {
                message,
                status: s.as_u16(),
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Decode error: {:?}", err);
            ApiError::Decode(format!("Decode error: {}", err))
        } else if err.is_timeout() {
            tracing::error!("Request timed out: {:?}", err);
            ApiError::Transport(format!("Request timed out: {}", err))
        } else {
            tracing::error!("Transport error: {:?}", err);
            ApiError::Transport(format!("Transport error: {}", err))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ApiError::Decode(format!("JSON error: {}", err))
    }
}
