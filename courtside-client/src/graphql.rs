//! GraphQL transport
//!
//! POSTs operation envelopes to the configured endpoint with the bearer
//! token attached, and splits the two failure channels: transport
//! errors from reqwest, business errors from the `errors` array.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::graphql::{GraphqlRequest, GraphqlResponse};

use crate::{ClientConfig, ClientError, ClientResult};

/// Executor seam over the GraphQL transport, mockable in tests.
#[async_trait]
pub trait GraphqlExecutor: Send + Sync {
    /// Execute one operation and return the raw `data` object.
    async fn execute(&self, request: GraphqlRequest) -> ClientResult<Value>;
}

/// HTTP GraphQL client
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    url: String,
    token: Option<String>,
}

impl GraphqlClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            url: config.graphql_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// GraphQL endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Attach the bearer token used for subsequent requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the bearer token (sign-out)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Execute an operation and deserialize one field of `data`.
    ///
    /// GraphQL responses nest the payload under the operation's root
    /// field (`{"data": {"fetchSessions": [...]}}`); this pulls that
    /// field out and deserializes it.
    pub async fn execute_field<T: DeserializeOwned>(
        &self,
        request: GraphqlRequest,
        field: &str,
    ) -> ClientResult<T> {
        let mut data = self.execute(request).await?;
        let value = data
            .get_mut(field)
            .map(Value::take)
            .ok_or_else(|| ClientError::InvalidResponse(format!("missing field `{}`", field)))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Like [`execute_field`](Self::execute_field) but tolerates a null
    /// field (e.g. fetch-by-id for a missing record).
    pub async fn execute_optional_field<T: DeserializeOwned>(
        &self,
        request: GraphqlRequest,
        field: &str,
    ) -> ClientResult<Option<T>> {
        let mut data = self.execute(request).await?;
        match data.get_mut(field).map(Value::take) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }
}

#[async_trait]
impl GraphqlExecutor for GraphqlClient {
    async fn execute(&self, request: GraphqlRequest) -> ClientResult<Value> {
        let mut req = self.client.post(&self.url).json(&request);
        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(text)),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                _ => Err(ClientError::InvalidResponse(format!(
                    "HTTP {}: {}",
                    status, text
                ))),
            };
        }

        let body: GraphqlResponse<Value> = response.json().await?;
        if body.has_errors() {
            return Err(ClientError::from_graphql_errors(&body.errors));
        }
        body.data
            .ok_or_else(|| ClientError::InvalidResponse("missing data".into()))
    }
}
