//! Courtside desk application
//!
//! Front-end logic for the court-rental session manager: auth session
//! handling, role routing, CRUD form drafts, billing/bet aggregation,
//! polling refresh, and local preferences. The interactive terminal
//! binary lives in `main.rs`; everything here is UI-independent.

pub mod core;
pub mod error;
pub mod forms;
pub mod prefs;
pub mod summary;
pub mod ui;

pub use error::{DeskError, DeskResult};
