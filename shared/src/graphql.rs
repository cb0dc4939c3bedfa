//! GraphQL wire envelope
//!
//! Request/response framing for the external GraphQL API. The schema
//! itself is owned by the server; these types only carry the envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single GraphQL operation: query text plus variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: Value::Null,
        }
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }
}

/// Error entry from the `errors` array of a GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphqlError {
    /// The `extensions.code` classification, when the server provides one
    /// (e.g. `UNAUTHENTICATED`, `BAD_USER_INPUT`, `FORBIDDEN`).
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(|code| code.as_str())
    }
}

/// Top-level GraphQL response: `data` and/or `errors`.
///
/// Per the GraphQL spec both may be present at once (partial data);
/// the client treats any non-empty `errors` as a business failure.
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T: DeserializeOwned> GraphqlResponse<T> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
