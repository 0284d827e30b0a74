//! Core types for provider-agnostic chat
//!
//! ## Organization
//! - `messages` - Role-tagged messages with optional attachments
//! - `conversation` - Conversation metadata bound to a provider/model pair

pub mod conversation;
pub mod messages;

pub use conversation::{Conversation, DEFAULT_TITLE, TITLE_MAX_CHARS};
pub use messages::{ContentType, Message, MessageRole};
