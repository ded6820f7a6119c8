use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::assistant::{ConversationContext, IntentResponder};
use crate::chat::messages::{ChatOutcome, ChatRequest, ReplySource};
use crate::chat::remote::RemoteChatBackend;
use crate::chat::traits::ChatBackend;
use crate::config::AppConfig;

/// Entry point for answering user messages.
///
/// Asks the remote backend first (when one is configured) and falls back to the
/// local `IntentResponder` on any failure. Never returns an error.
pub struct ChatService {
    backend: Option<Arc<dyn ChatBackend>>,
    responder: IntentResponder,
    user_id: Option<String>,
}

impl ChatService {
    /// Local-only service.
    pub fn new(responder: IntentResponder) -> Self {
        Self {
            backend: None,
            responder,
            user_id: None,
        }
    }

    /// Builds the service described by the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut service =
            Self::new(IntentResponder::new()).with_user_id(config.user_id.clone());

        match RemoteChatBackend::from_config(config) {
            Some(remote) => service = service.with_backend(Arc::new(remote)),
            None => info!("No remote chat backend configured, answering offline"),
        }

        service
    }

    pub fn with_backend(mut self, backend: Arc<dyn ChatBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Answers `input` in the given conversation.
    ///
    /// Blank input never reaches the backend.
    #[instrument(skip(self, input, context), fields(role = %context.role, history_len = context.len()))]
    pub async fn handle(&self, input: &str, context: &ConversationContext) -> ChatOutcome {
        if let Some(backend) = self.backend.as_ref().filter(|_| !input.trim().is_empty()) {
            let request = ChatRequest::new(input, context).with_user_id(self.user_id.clone());
            match backend.reply(&request).await {
                Ok(reply) => {
                    return ChatOutcome {
                        reply,
                        source: ReplySource::Remote,
                    };
                }
                Err(e) => warn!("Remote chat failed, using offline assistant: {}", e),
            }
        }

        let (reply, stage) =
            self.responder
                .respond_with_stage(input, context.role, &context.recent());
        info!(stage = ?stage, "Answered offline");

        ChatOutcome {
            reply,
            source: ReplySource::Local,
        }
    }
}
