//! ChatHandler - logistics assistant over a running conversation.
//!
//! Replies are free text. The only post-processing is removing markdown
//! emphasis, so the apology string is a valid reply here.

use std::sync::Arc;

use crate::application::completion::CompletionClient;
use crate::domain::foundation::UserId;
use crate::domain::trade::{strip_emphasis, ChatRole, ChatTurn, ConversationRecord, TaskKind};
use crate::ports::ConversationLog;

/// Command carrying the whole conversation so far.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    /// All turns, oldest first. The last one is normally the new user message.
    pub messages: Vec<ChatTurn>,
    /// When set, the exchange is written to the conversation log.
    pub user_id: Option<UserId>,
}

impl ChatCommand {
    /// Content of the last user turn, or empty if there is none.
    pub fn latest_user_message(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|t| t.role == ChatRole::User)
            .map(|t| t.content.as_str())
            .unwrap_or("")
    }

    /// Every turn except the final one.
    pub fn prior_turns(&self) -> &[ChatTurn] {
        match self.messages.split_last() {
            Some((_, prior)) => prior,
            None => &[],
        }
    }
}

/// Assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResult {
    pub response: String,
    pub model: String,
}

/// Handler for chat turns.
#[derive(Clone)]
pub struct ChatHandler {
    client: CompletionClient,
    log: Arc<dyn ConversationLog>,
}

impl ChatHandler {
    pub fn new(client: CompletionClient, log: Arc<dyn ConversationLog>) -> Self {
        Self { client, log }
    }

    pub async fn handle(&self, cmd: ChatCommand) -> ChatResult {
        let query = cmd.latest_user_message().to_string();
        let prompt = build_prompt(cmd.prior_turns(), &query);
        let raw = self.client.generate(TaskKind::Chat, &prompt).await;

        if let Some(user_id) = cmd.user_id {
            let record = ConversationRecord::new(user_id, query, raw.clone());
            if let Err(err) = self.log.insert(&record).await {
                tracing::error!(
                    user_id = %record.user_id,
                    error = %err,
                    "Error storing conversation"
                );
            }
        }

        ChatResult {
            response: strip_emphasis(&raw),
            model: self.client.model().to_string(),
        }
    }
}

fn build_prompt(prior: &[ChatTurn], query: &str) -> String {
    let transcript = prior
        .iter()
        .map(ChatTurn::transcript_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an AI assistant for an Export & Import business platform. Your task is to assist with logistics, documentation, market insights, shipping logistics, customs regulations.
You provide helpful, accurate, and concise responses without asking unnecessary follow-up questions.

Previous conversation:
{}

User's question: {}

Your responses must include factual, accurate data and references to credible sources, such as research papers, laws, or official regulations (with links)."#,
        transcript, query
    )
}
