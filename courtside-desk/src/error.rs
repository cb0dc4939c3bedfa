//! Desk application errors

use shared::ErrorCode;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum DeskError {
    /// Error from the GraphQL/archive client
    #[error(transparent)]
    Client(#[from] courtside_client::ClientError),

    /// Draft failed client-side validation
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A submit was attempted while another is still in flight
    #[error("Submission already in progress")]
    SubmitInFlight,

    /// No signed-in session
    #[error("Not signed in")]
    NotSignedIn,

    /// The cached session token has expired
    #[error("Session expired")]
    SessionExpired,

    /// PIN must be exactly four digits
    #[error("Invalid PIN")]
    InvalidPin,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeskError {
    /// The unified numeric code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            DeskError::Client(err) => err.error_code(),
            DeskError::Validation(_) => ErrorCode::ValidationFailed,
            DeskError::SubmitInFlight => ErrorCode::DuplicateSubmission,
            DeskError::NotSignedIn => ErrorCode::NotAuthenticated,
            DeskError::SessionExpired => ErrorCode::SessionExpired,
            DeskError::InvalidPin => ErrorCode::InvalidPin,
            DeskError::Io(_) | DeskError::Json(_) => ErrorCode::InternalError,
        }
    }
}

/// Result type for desk operations
pub type DeskResult<T> = Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_land_in_their_ranges() {
        assert_eq!(DeskError::SubmitInFlight.error_code().code(), 2002);
        assert_eq!(DeskError::InvalidPin.error_code().code(), 1001);
        assert_eq!(DeskError::SessionExpired.error_code().code(), 1003);
    }
}
