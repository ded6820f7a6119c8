//! Conversation context handed to the responder with every request.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Number of prior messages kept for a request.
pub const MAX_HISTORY: usize = 10;

/// Role declared by the caller. Unknown values parse to `Visitor`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum Role {
    #[default]
    Visitor,
    User,
    MuseumAdmin,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Lenient parse: case, `_` and `-` are ignored.
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "user" => Role::User,
            "museumadmin" => Role::MuseumAdmin,
            "admin" => Role::Admin,
            "superadmin" => Role::SuperAdmin,
            _ => Role::Visitor,
        }
    }

    /// Wire name of the role
    pub fn label(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::User => "user",
            Role::MuseumAdmin => "museumAdmin",
            Role::Admin => "admin",
            Role::SuperAdmin => "superAdmin",
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single prior message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMessage {
    pub text: String,
    pub sender: Sender,
}

impl HistoryMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Transient per-request context. Persisting it is the transport's job.
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    pub role: Role,
    history: VecDeque<HistoryMessage>,
}

impl ConversationContext {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            history: VecDeque::with_capacity(MAX_HISTORY),
        }
    }

    /// Builds a context from an arbitrary transcript, keeping only the tail.
    pub fn with_history(role: Role, history: impl IntoIterator<Item = HistoryMessage>) -> Self {
        let mut context = Self::new(role);
        for message in history {
            context.push(message);
        }
        context
    }

    /// Appends a message, evicting the oldest once `MAX_HISTORY` is exceeded.
    pub fn push(&mut self, message: HistoryMessage) {
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(message);
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// The most recent messages, oldest first.
    pub fn recent(&self) -> Vec<HistoryMessage> {
        self.history.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
