//! Client error types
//!
//! Transport failures and GraphQL business errors are distinct failure
//! channels: the former come from the HTTP layer, the latter from the
//! `errors` array of an otherwise successful response.

use shared::graphql::GraphqlError;
use shared::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network/transport failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// GraphQL-level business error
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// Authentication required or token rejected
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server-side input validation rejected the request
    #[error("Validation error: {0}")]
    Validation(String),

    /// Response shape did not match the expected schema
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map the `errors` array of a GraphQL response to the most
    /// specific error variant, keyed on `extensions.code`.
    pub fn from_graphql_errors(errors: &[GraphqlError]) -> Self {
        let first = match errors.first() {
            Some(err) => err,
            None => return ClientError::InvalidResponse("empty errors array".into()),
        };
        for err in errors.iter().skip(1) {
            tracing::debug!(message = %err.message, "additional GraphQL error");
        }
        match first.code() {
            Some("UNAUTHENTICATED") => ClientError::Unauthorized(first.message.clone()),
            Some("FORBIDDEN") => ClientError::Forbidden(first.message.clone()),
            Some("BAD_USER_INPUT") => ClientError::Validation(first.message.clone()),
            Some("NOT_FOUND") => ClientError::NotFound(first.message.clone()),
            _ => ClientError::Graphql(first.message.clone()),
        }
    }

    /// The unified numeric code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ClientError::Transport(err) if err.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Transport(_) => ErrorCode::NetworkError,
            ClientError::Graphql(_) => ErrorCode::BusinessError,
            ClientError::Unauthorized(_) => ErrorCode::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::Validation(_) => ErrorCode::ValidationFailed,
            ClientError::InvalidResponse(_) => ErrorCode::InvalidResponse,
            ClientError::Serialization(_) => ErrorCode::InvalidResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err_with_code(code: &str) -> GraphqlError {
        serde_json::from_value(serde_json::json!({
            "message": "boom",
            "extensions": { "code": code },
        }))
        .unwrap()
    }

    #[test]
    fn unauthenticated_maps_to_unauthorized() {
        let err = ClientError::from_graphql_errors(&[err_with_code("UNAUTHENTICATED")]);
        assert!(matches!(err, ClientError::Unauthorized(_)));
    }

    #[test]
    fn unknown_code_maps_to_graphql() {
        let err = ClientError::from_graphql_errors(&[err_with_code("SOMETHING_ELSE")]);
        assert!(matches!(err, ClientError::Graphql(m) if m == "boom"));
    }

    #[test]
    fn unified_codes_follow_the_variant() {
        let err = ClientError::from_graphql_errors(&[err_with_code("UNAUTHENTICATED")]);
        assert_eq!(err.error_code(), shared::ErrorCode::NotAuthenticated);
        assert_eq!(err.error_code().code(), 1002);

        let err = ClientError::Validation("bad input".into());
        assert_eq!(err.error_code().code(), 2001);
    }

    #[test]
    fn missing_extensions_maps_to_graphql() {
        let plain: GraphqlError =
            serde_json::from_value(serde_json::json!({ "message": "nope" })).unwrap();
        let err = ClientError::from_graphql_errors(&[plain]);
        assert!(matches!(err, ClientError::Graphql(m) if m == "nope"));
    }
}
