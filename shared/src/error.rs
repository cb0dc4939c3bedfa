//! Unified error codes
//!
//! Numeric error codes shared across the client stack, in stable
//! ranges so the front-end can map them to user-facing messages:
//!
//! | Range | Category |
//! |-------|----------|
//! | 0     | Success |
//! | 1xxx  | Auth |
//! | 2xxx  | Validation |
//! | 3xxx  | Network / transport |
//! | 4xxx  | Business (server-side GraphQL errors) |
//! | 9xxx  | Internal |

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[error("Success")]
    Success,
    // Auth
    #[error("Invalid PIN")]
    InvalidPin,
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Session expired")]
    SessionExpired,
    #[error("Permission denied")]
    PermissionDenied,
    // Validation
    #[error("Validation failed")]
    ValidationFailed,
    #[error("Duplicate submission")]
    DuplicateSubmission,
    // Network
    #[error("Network error")]
    NetworkError,
    #[error("Request timed out")]
    TimeoutError,
    #[error("Invalid response")]
    InvalidResponse,
    // Business
    #[error("Not found")]
    NotFound,
    #[error("Business error")]
    BusinessError,
    // Internal
    #[error("Internal error")]
    InternalError,
}

impl ErrorCode {
    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::InvalidPin => 1001,
            ErrorCode::NotAuthenticated => 1002,
            ErrorCode::SessionExpired => 1003,
            ErrorCode::PermissionDenied => 1004,
            ErrorCode::ValidationFailed => 2001,
            ErrorCode::DuplicateSubmission => 2002,
            ErrorCode::NetworkError => 3001,
            ErrorCode::TimeoutError => 3002,
            ErrorCode::InvalidResponse => 3003,
            ErrorCode::NotFound => 4001,
            ErrorCode::BusinessError => 4002,
            ErrorCode::InternalError => 9001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable_and_distinct() {
        let all = [
            ErrorCode::Success,
            ErrorCode::InvalidPin,
            ErrorCode::NotAuthenticated,
            ErrorCode::SessionExpired,
            ErrorCode::PermissionDenied,
            ErrorCode::ValidationFailed,
            ErrorCode::DuplicateSubmission,
            ErrorCode::NetworkError,
            ErrorCode::TimeoutError,
            ErrorCode::InvalidResponse,
            ErrorCode::NotFound,
            ErrorCode::BusinessError,
            ErrorCode::InternalError,
        ];
        let mut seen = std::collections::HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }
}
