use courtside_client::ClientConfig;

/// Desk application configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | GRAPHQL_URL | http://localhost:4000/graphql | GraphQL endpoint |
/// | ARCHIVE_URL | https://192.168.6.64:10000 | CSV archive base URL |
/// | WORK_DIR | ~/.courtside (falls back to ./courtside-data) | local data directory |
/// | POLL_INTERVAL_SECS | 60 | session refresh interval |
/// | REQUEST_TIMEOUT_SECS | 30 | HTTP request timeout |
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint URL
    pub graphql_url: String,
    /// CSV archive service base URL
    pub archive_url: String,
    /// Local data directory (auth session, preferences)
    pub work_dir: String,
    /// Background refresh interval in seconds
    pub poll_interval_secs: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

fn default_work_dir() -> String {
    std::env::var("HOME")
        .map(|home| format!("{}/.courtside", home))
        .unwrap_or_else(|_| "./courtside-data".into())
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            graphql_url: std::env::var("GRAPHQL_URL")
                .unwrap_or_else(|_| "http://localhost:4000/graphql".into()),
            archive_url: std::env::var("ARCHIVE_URL")
                .unwrap_or_else(|_| "https://192.168.6.64:10000".into()),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| default_work_dir()),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Override the work dir, used by tests.
    pub fn with_work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// Client configuration derived from this one.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.graphql_url)
            .with_archive_url(&self.archive_url)
            .with_timeout(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
