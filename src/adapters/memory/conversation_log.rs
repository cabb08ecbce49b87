//! In-memory conversation log.

use async_trait::async_trait;
use std::sync::Mutex;

use super::lock;
use crate::domain::foundation::DomainError;
use crate::domain::trade::ConversationRecord;
use crate::ports::ConversationLog;

/// In-memory implementation of the ConversationLog port.
#[derive(Default)]
pub struct InMemoryConversationLog {
    records: Mutex<Vec<ConversationRecord>>,
}

impl InMemoryConversationLog {
    /// Creates a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all logged exchanges.
    pub fn records(&self) -> Vec<ConversationRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ConversationLog for InMemoryConversationLog {
    async fn insert(&self, record: &ConversationRecord) -> Result<(), DomainError> {
        lock(&self.records)?.push(record.clone());
        Ok(())
    }
}
