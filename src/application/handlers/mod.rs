//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ai;
pub mod logistics;
