//! Shared types for the Courtside client stack
//!
//! Domain models, GraphQL wire envelope, auth DTOs and error codes
//! shared between `courtside-client` and `courtside-desk`.

pub mod client;
pub mod error;
pub mod graphql;
pub mod models;
pub mod util;

pub use error::ErrorCode;
pub use graphql::{GraphqlError, GraphqlRequest, GraphqlResponse};
