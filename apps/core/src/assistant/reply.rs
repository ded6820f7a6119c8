//! Chat reply - output value object of the assistant.

use serde::{Deserialize, Serialize};

/// A supporting reference attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    /// Free-form citation
    Text(String),
    /// Structured link
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
}

impl Reference {
    /// One-line rendering for terminals and logs
    pub fn display_line(&self) -> String {
        match self {
            Reference::Text(text) => text.clone(),
            Reference::Link { title, url, content } => {
                let head = title.as_deref().or(content.as_deref()).unwrap_or("reference");
                match url {
                    Some(url) => format!("{} <{}>", head, url),
                    None => head.to_string(),
                }
            }
        }
    }
}

/// Reply produced for one user message.
///
/// `text` is never empty. `suggestions` and `references` may be empty but are
/// always present on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl ChatReply {
    pub fn new(text: impl Into<String>, suggestions: &[&str]) -> Self {
        Self {
            text: text.into(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            references: vec![],
        }
    }
}
