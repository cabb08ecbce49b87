//! PostgreSQL implementation of ConversationLog.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::domain::trade::ConversationRecord;
use crate::ports::ConversationLog;

/// Appends chat exchanges to `ai_conversations`.
#[derive(Clone)]
pub struct PostgresConversationLog {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresConversationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConversationLog")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresConversationLog {
    /// Creates a new log instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationLog for PostgresConversationLog {
    async fn insert(&self, record: &ConversationRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ai_conversations (user_id, conversation_id, query, response)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.user_id.as_str())
        .bind(&record.conversation_id)
        .bind(&record.query)
        .bind(&record.response)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert conversation", e))?;

        Ok(())
    }
}
