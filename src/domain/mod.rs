//! Domain layer - value types and rules with no I/O.
//!
//! - `foundation` - identifiers, timestamps, errors
//! - `logistics` - shipments, tracking events, document records
//! - `trade` - AI task results and the response contract

pub mod foundation;
pub mod logistics;
pub mod trade;
