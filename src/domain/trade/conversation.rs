//! Chat conversation turns and the stored exchange record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Label used when rendering a transcript.
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "Assistant",
        }
    }
}

/// One message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    /// Renders the turn as a `Label: content` transcript line.
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.role.label(), self.content)
    }
}

/// A chat question and answer as stored for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationRecord {
    pub user_id: UserId,
    /// RFC 3339 timestamp of the exchange.
    pub conversation_id: String,
    pub query: String,
    pub response: String,
}

impl ConversationRecord {
    /// Creates a record stamped with the current time.
    pub fn new(user_id: UserId, query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            user_id,
            conversation_id: Timestamp::now().to_rfc3339(),
            query: query.into(),
            response: response.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_line_uses_role_label() {
        assert_eq!(ChatTurn::user("Hi").transcript_line(), "User: Hi");
        assert_eq!(
            ChatTurn::assistant("Hello").transcript_line(),
            "Assistant: Hello"
        );
    }

    #[test]
    fn role_deserializes_lowercase() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role":"assistant","content":"ok"}"#).unwrap();
        assert_eq!(turn.role, ChatRole::Assistant);
    }

    #[test]
    fn record_id_is_a_timestamp() {
        let record = ConversationRecord::new(UserId::new("u1").unwrap(), "q", "a");
        assert!(record.conversation_id.ends_with('Z'));
        assert!(record.conversation_id.parse::<chrono::DateTime<chrono::Utc>>().is_ok());
    }
}
