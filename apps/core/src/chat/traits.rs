use async_trait::async_trait;

use crate::assistant::ChatReply;
use crate::chat::messages::ChatRequest;
use crate::error::AppError;

/// Defines the interface of a chat backend.
///
/// This trait abstracts where replies come from, allowing a remote HTTP service
/// or a test double to be plugged into the `ChatService` interchangeably.
#[async_trait]
pub trait ChatBackend: Send + Sync + 'static {
    /// Answers a single request. An empty reply must be reported as an error.
    async fn reply(&self, request: &ChatRequest) -> Result<ChatReply, AppError>;
}
