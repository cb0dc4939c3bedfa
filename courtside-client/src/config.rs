//! Client configuration

/// Configuration for connecting to the GraphQL API and the archive
/// service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint URL (e.g. "http://localhost:4000/graphql")
    pub graphql_url: String,

    /// CSV archive service base URL (fixed host, read-only)
    pub archive_url: String,

    /// Bearer token for authenticated requests
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration for the given GraphQL endpoint
    pub fn new(graphql_url: impl Into<String>) -> Self {
        Self {
            graphql_url: graphql_url.into(),
            archive_url: "https://192.168.6.64:10000".to_string(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the archive service base URL
    pub fn with_archive_url(mut self, url: impl Into<String>) -> Self {
        self.archive_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a GraphQL client from this configuration
    pub fn build_graphql_client(&self) -> Result<super::GraphqlClient, super::ClientError> {
        super::GraphqlClient::new(self)
    }

    /// Create an archive client from this configuration
    pub fn build_archive_client(&self) -> Result<super::ArchiveClient, super::ClientError> {
        super::ArchiveClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000/graphql")
    }
}
