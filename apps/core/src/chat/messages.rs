use serde::Serialize;

use crate::assistant::{ChatReply, ConversationContext, HistoryMessage, Role};

/// A user message together with the context a backend needs to answer it.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub input: String,
    pub role: Role,
    pub user_id: Option<String>,
    /// At most `MAX_HISTORY` entries, oldest first.
    pub history: Vec<HistoryMessage>,
}

impl ChatRequest {
    pub fn new(input: impl Into<String>, context: &ConversationContext) -> Self {
        Self {
            input: input.into(),
            role: context.role,
            user_id: None,
            history: context.recent(),
        }
    }

    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Remote,
    Local,
}

/// Reply handed back to the transport.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    pub reply: ChatReply,
    pub source: ReplySource,
}
