//! Conversation log port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::trade::ConversationRecord;

/// Append-only log of chat exchanges.
#[async_trait]
pub trait ConversationLog: Send + Sync {
    /// Record one query/response pair.
    async fn insert(&self, record: &ConversationRecord) -> Result<(), DomainError>;
}
