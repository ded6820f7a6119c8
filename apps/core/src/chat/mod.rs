//! # Chat Module
//!
//! Remote-first chat: the configured backend is asked first and the offline
//! assistant answers whenever it is missing, slow or unusable.

pub mod messages;
pub mod remote;
pub mod service;
pub mod traits;

pub use messages::{ChatOutcome, ChatRequest, ReplySource};
pub use remote::RemoteChatBackend;
pub use service::ChatService;
pub use traits::ChatBackend;
