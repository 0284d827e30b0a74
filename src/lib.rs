//! # multi-chat
//!
//! Provider-agnostic chat client for OpenAI, Anthropic, Groq, Gemini, Cerebras,
//! Mistral and OpenRouter.
//!
//! ## Key Features
//!
//! - **One message format**: role-tagged [`Message`]s, whatever the provider
//! - **Static provider registry**: endpoint, auth scheme and response shape per
//!   [`Provider`], no per-call-site switching
//! - **Explicit configuration**: credentials and parameters are passed in through
//!   [`ChatConfig`], never read from global state after construction
//! - **Conversation bookkeeping**: [`ConversationStore`] and [`ChatSession`] for
//!   callers that want turn handling out of the box
//!
//! ## Example
//!
//! ```rust,no_run
//! use multi_chat::{ChatConfig, ChatService, ChatSession, CredentialStore, Provider};
//!
//! # async fn example() -> multi_chat::ChatResult<()> {
//! let credentials = CredentialStore::new().with_key(Provider::OpenAI, "sk-...");
//! let mut session = ChatSession::new(ChatService::new(ChatConfig::new(credentials)));
//!
//! let conversation_id = session
//!     .store_mut()
//!     .create_conversation(Provider::OpenAI, "gpt-4.1-mini")?
//!     .id();
//! let reply = session.send_turn(conversation_id, "Hello, how are you?", None).await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod providers;
pub mod session;
pub mod store;
pub mod transport;

#[cfg(test)]
pub mod tests;

pub use client::ChatService;
pub use config::{ChatConfig, ChatParams};
pub use core_types::{ContentType, Conversation, Message, MessageRole};
pub use credentials::CredentialStore;
pub use error::{ChatError, ChatResult};
pub use providers::{
    model_description, AuthScheme, ChatRequest, Provider, ProviderDescriptor, RequestBuilder,
    ResponseParser, ResponseShape,
};
pub use session::ChatSession;
pub use store::ConversationStore;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
