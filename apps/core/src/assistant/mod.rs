//! # Assistant Module
//!
//! Offline heritage assistant for EthioHeritage360.
//! Answers from static tables when the remote chat backend is unavailable.
//!
//! ## Components
//! - `context`: Roles, message history and per-request context
//! - `knowledge`: Curated Q&A and heritage site tables
//! - `intent`: Regex rules for role-scoped and general topics
//! - `reply`: Output value object
//! - `responder`: Main matcher

pub mod context;
pub mod intent;
pub mod knowledge;
pub mod reply;
pub mod responder;

// Re-export main types for convenience
#[allow(unused_imports)]
pub use context::{ConversationContext, HistoryMessage, Role, Sender, MAX_HISTORY};
#[allow(unused_imports)]
pub use reply::{ChatReply, Reference};
#[allow(unused_imports)]
pub use responder::{FixedPicker, IntentResponder, SeededPicker, Stage, VariantPicker};
