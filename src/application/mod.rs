//! Application layer - completion client and task handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod completion;
pub mod handlers;

pub use completion::{CompletionClient, APOLOGY, DEFAULT_MODEL};
