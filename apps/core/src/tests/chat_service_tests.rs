//! Chat Service Tests
//!
//! Remote-first behaviour and offline fallback of the `ChatService`.

use crate::assistant::{
    ChatReply, ConversationContext, FixedPicker, HistoryMessage, IntentResponder, Role,
};
use crate::chat::{ChatBackend, ChatRequest, ChatService, RemoteChatBackend, ReplySource};
use crate::config::AppConfig;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Records every request and answers with a fixed reply
struct RecordingBackend {
    reply: ChatReply,
    requests: Mutex<Vec<ChatRequest>>,
}

impl RecordingBackend {
    fn new(text: &str) -> Self {
        Self {
            reply: ChatReply::new(text, &["Ask another question"]),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for RecordingBackend {
    async fn reply(&self, request: &ChatRequest) -> Result<ChatReply, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Always fails
struct FailingBackend;

#[async_trait]
impl ChatBackend for FailingBackend {
    async fn reply(&self, _request: &ChatRequest) -> Result<ChatReply, AppError> {
        Err(AppError::Backend("backend unavailable".to_string()))
    }
}

fn offline_responder() -> IntentResponder {
    IntentResponder::with_picker(FixedPicker(0))
}

fn long_context(role: Role) -> ConversationContext {
    let history = (0..14).flat_map(|i| {
        [
            HistoryMessage::user(format!("question {}", i)),
            HistoryMessage::bot(format!("answer {}", i)),
        ]
    });
    ConversationContext::with_history(role, history)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_only_service_answers_locally() {
        let service = ChatService::new(offline_responder());
        let context = ConversationContext::new(Role::Visitor);

        let outcome = service.handle("tell me about aksum", &context).await;

        assert!(!service.has_backend());
        assert_eq!(outcome.source, ReplySource::Local);
        assert!(outcome.reply.text.contains("Axum, Tigray Region"));
    }

    #[tokio::test]
    async fn test_remote_reply_is_preferred() {
        let backend = Arc::new(RecordingBackend::new("Remote says hi"));
        let service = ChatService::new(offline_responder())
            .with_backend(backend.clone())
            .with_user_id(Some("visitor-1".to_string()));
        let context = long_context(Role::User);

        let outcome = service.handle("hello", &context).await;

        assert_eq!(outcome.source, ReplySource::Remote);
        assert_eq!(outcome.reply.text, "Remote says hi");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].input, "hello");
        assert_eq!(requests[0].role, Role::User);
        assert_eq!(requests[0].user_id.as_deref(), Some("visitor-1"));
        // Only the ten most recent messages are forwarded
        assert_eq!(requests[0].history.len(), 10);
        assert_eq!(requests[0].history[0].text, "question 9");
        assert_eq!(requests[0].history[9].text, "answer 13");
    }

    #[tokio::test]
    async fn test_backend_error_falls_back_to_offline() {
        let service = ChatService::new(offline_responder()).with_backend(Arc::new(FailingBackend));
        let context = ConversationContext::new(Role::MuseumAdmin);

        let outcome = service
            .handle("how do I upload an artifact", &context)
            .await;

        assert_eq!(outcome.source, ReplySource::Local);
        assert!(outcome.reply.text.contains("Artifact Management"));
    }

    #[tokio::test]
    async fn test_blank_input_skips_backend() {
        let backend = Arc::new(RecordingBackend::new("should not be used"));
        let service = ChatService::new(offline_responder()).with_backend(backend.clone());
        let context = ConversationContext::new(Role::Visitor);

        let outcome = service.handle("   ", &context).await;

        assert!(backend.requests().is_empty());
        assert_eq!(outcome.source, ReplySource::Local);
        assert!(outcome
            .reply
            .text
            .starts_with("That's an interesting question!"));
    }

    #[tokio::test]
    async fn test_fallback_matches_direct_responder_output() {
        let service = ChatService::new(offline_responder()).with_backend(Arc::new(FailingBackend));
        let context = ConversationContext::new(Role::Visitor);

        let outcome = service.handle("hello", &context).await;
        let direct = offline_responder().respond("hello", Role::Visitor, &[]);

        assert_eq!(outcome.reply, direct);
    }
}

#[cfg(test)]
mod remote_fallback_tests {
    use super::*;

    fn remote_service(server: &MockServer, timeout: Duration) -> ChatService {
        let remote = RemoteChatBackend::new(&server.uri(), None, timeout);
        ChatService::new(offline_responder()).with_backend(Arc::new(remote))
    }

    #[tokio::test]
    async fn test_remote_success_end_to_end() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Timkat is celebrated in January.",
                "references": ["Ethiopian Orthodox Tewahedo Church"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = remote_service(&mock_server, Duration::from_secs(2));
        let outcome = service
            .handle("when is timkat", &ConversationContext::new(Role::Visitor))
            .await;

        assert_eq!(outcome.source, ReplySource::Remote);
        assert_eq!(outcome.reply.text, "Timkat is celebrated in January.");
        assert_eq!(outcome.reply.references.len(), 1);
    }

    #[tokio::test]
    async fn test_remote_unavailable_falls_back() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let service = remote_service(&mock_server, Duration::from_secs(2));
        let outcome = service
            .handle("tell me about aksum", &ConversationContext::new(Role::Visitor))
            .await;

        assert_eq!(outcome.source, ReplySource::Local);
        assert!(outcome.reply.text.contains("Kingdom of Aksum"));
    }

    #[tokio::test]
    async fn test_remote_empty_reply_falls_back() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let service = remote_service(&mock_server, Duration::from_secs(2));
        let outcome = service
            .handle("asdkfjasdf", &ConversationContext::new(Role::Visitor))
            .await;

        assert_eq!(outcome.source, ReplySource::Local);
        assert_eq!(outcome.reply.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_slow_remote_falls_back() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "text": "late answer" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let service = remote_service(&mock_server, Duration::from_millis(50));
        let outcome = service
            .handle("I love traditional music", &ConversationContext::new(Role::User))
            .await;

        assert_eq!(outcome.source, ReplySource::Local);
        assert!(outcome.reply.text.starts_with("Ethiopian culture"));
    }

    #[tokio::test]
    async fn test_stalled_error_response_falls_back() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\nbusy")
                .await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let url = format!("http://{}", addr);
        let remote = RemoteChatBackend::new(&url, None, Duration::from_millis(200));
        let service = ChatService::new(offline_responder()).with_backend(Arc::new(remote));

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            service.handle("tell me about aksum", &ConversationContext::new(Role::Visitor)),
        )
        .await
        .expect("handle should fall back within the configured timeout");

        assert_eq!(outcome.source, ReplySource::Local);
        assert!(outcome.reply.text.contains("Kingdom of Aksum"));
    }

    #[test]
    fn test_from_config_wires_backend() {
        let offline = ChatService::from_config(&AppConfig::default());
        assert!(!offline.has_backend());

        let config = AppConfig {
            chat_api_url: Some("http://localhost:5000/api".to_string()),
            ..AppConfig::default()
        };
        let online = ChatService::from_config(&config);
        assert!(online.has_backend());
    }
}
