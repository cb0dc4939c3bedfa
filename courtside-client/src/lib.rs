//! Courtside Client - HTTP client for the court-rental GraphQL API
//!
//! Provides typed query/mutation calls against the external GraphQL
//! endpoint, plus a read-only client for the CSV archive service.

pub mod archive;
pub mod config;
pub mod error;
pub mod graphql;
pub mod operations;

pub use archive::{ArchiveClient, CsvFile};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use graphql::{GraphqlClient, GraphqlExecutor};

// Re-export shared types for convenience
pub use shared::client::{PinLoginResponse, UserProfile};
