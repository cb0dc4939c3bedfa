//! Typed GraphQL operations
//!
//! Thin wrappers over [`GraphqlClient`](crate::GraphqlClient), one
//! function per query/mutation of the external schema. Selection sets
//! mirror what the desk application actually renders.

mod mutations;
mod queries;
