use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};
use uuid::Uuid;

use crate::assistant::{ChatReply, HistoryMessage, Reference, Role};
use crate::chat::messages::ChatRequest;
use crate::chat::traits::ChatBackend;
use crate::config::AppConfig;
use crate::error::AppError;

const CHAT_ENDPOINT: &str = "chat";
const CLIENT_NAME: &str = "ethioheritage-core";

// --- Wire format ---

#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    context: PayloadContext<'a>,
    user: PayloadUser<'a>,
    history: &'a [HistoryMessage],
    metadata: PayloadMetadata,
}

#[derive(Debug, Serialize)]
struct PayloadContext<'a> {
    message: &'a str,
    role: Role,
}

#[derive(Debug, Serialize)]
struct PayloadUser<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    role: Role,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PayloadMetadata {
    request_id: String,
    timestamp: String,
    client: &'static str,
}

/// Backends disagree on the name of the text field; the first non-blank one wins.
#[derive(Debug, Deserialize)]
struct RemoteReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    references: Vec<Reference>,
}

impl RemoteReply {
    fn into_reply(self) -> Option<ChatReply> {
        let text = [self.text, self.response, self.message]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.trim().is_empty())?;

        Some(ChatReply {
            text,
            suggestions: self.suggestions,
            references: self.references,
        })
    }
}

/// HTTP client for the remote chat backend.
pub struct RemoteChatBackend {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl RemoteChatBackend {
    pub fn new(base_url: &str, auth_token: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
            timeout,
        }
    }

    /// Returns `None` when no backend URL is configured.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        let base_url = config.chat_api_url.as_deref()?;
        info!("Remote chat backend configured at {}", base_url);
        Some(Self::new(
            base_url,
            config.chat_api_token.clone(),
            config.chat_api_timeout(),
        ))
    }

    fn build_request(&self, payload: &ChatPayload<'_>) -> reqwest::RequestBuilder {
        let request = self
            .client
            .post(format!("{}/{}", self.base_url, CHAT_ENDPOINT))
            .json(payload);

        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send, status check and body read. Callers bound the whole exchange with one timeout.
    async fn exchange(&self, payload: &ChatPayload<'_>) -> Result<RemoteReply, AppError> {
        let res = self.build_request(payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Backend(format!(
                "Chat request failed with status {}: {}",
                status, body
            )));
        }

        Ok(res.json().await?)
    }
}

#[async_trait]
impl ChatBackend for RemoteChatBackend {
    async fn reply(&self, request: &ChatRequest) -> Result<ChatReply, AppError> {
        let payload = ChatPayload {
            context: PayloadContext {
                message: &request.input,
                role: request.role,
            },
            user: PayloadUser {
                id: request.user_id.as_deref(),
                role: request.role,
            },
            history: &request.history,
            metadata: PayloadMetadata {
                request_id: Uuid::new_v4().to_string(),
                timestamp: Utc::now().to_rfc3339(),
                client: CLIENT_NAME,
            },
        };

        debug!(request_id = %payload.metadata.request_id, "Sending chat request");

        let body = timeout(self.timeout, self.exchange(&payload)).await??;

        body.into_reply()
            .ok_or_else(|| AppError::Backend("Chat backend returned an empty reply".to_string()))
    }
}
