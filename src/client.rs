//! Chat orchestrator
//!
//! [`ChatService`] runs one turn: build the provider request, execute it, require a
//! `200`, and extract the assistant text. There is no retry and no partial recovery.
//!
//! # Example
//!
//! ```rust,no_run
//! use multi_chat::{ChatConfig, ChatService, CredentialStore, Message, Provider};
//! use uuid::Uuid;
//!
//! # async fn example() -> multi_chat::ChatResult<()> {
//! let credentials = CredentialStore::new().with_key(Provider::Groq, "gsk-...");
//! let service = ChatService::new(ChatConfig::new(credentials));
//!
//! let conversation_id = Uuid::new_v4();
//! let messages = vec![Message::user(conversation_id, "Hello!")];
//! let reply = service
//!     .send(&messages, Provider::Groq, "llama-3.3-70b-versatile")
//!     .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

use crate::config::ChatConfig;
use crate::core_types::{Conversation, Message};
use crate::error::{ChatError, ChatResult};
use crate::logging::{body_preview, log_debug, log_error, log_info};
use crate::providers::{Provider, RequestBuilder, ResponseParser};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// The only status accepted as success.
const SUCCESS_STATUS: u16 = 200;

/// Provider-agnostic chat orchestrator.
#[derive(Clone)]
pub struct ChatService {
    config: ChatConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ChatService {
    /// Create a service that talks HTTP through `reqwest`, honoring
    /// `config.request_timeout`.
    pub fn new(config: ChatConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(config.request_timeout));
        Self::with_transport(config, transport)
    }

    /// Create a service on a caller-supplied transport.
    pub fn with_transport(config: ChatConfig, transport: Arc<dyn HttpTransport>) -> Self {
        log_debug!(
            configured_providers = config.credentials.configured_providers().len(),
            timeout_secs = config.request_timeout.map(|t| t.as_secs()),
            "Chat service initialized"
        );
        Self { config, transport }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Providers that can be used right now (those with a configured key).
    pub fn available_providers(&self) -> Vec<Provider> {
        self.config.credentials.configured_providers()
    }

    /// Send `messages` to `provider` using `model` and return the assistant text.
    ///
    /// # Errors
    ///
    /// - [`ChatError::MissingCredential`]: no key for `provider`; no HTTP call is made.
    /// - [`ChatError::ApiError`]: the status was not exactly `200`. The body is
    ///   logged and not parsed.
    /// - [`ChatError::InvalidResponse`]: `200` with a body of the wrong shape.
    /// - [`ChatError::RequestFailed`] / [`ChatError::Timeout`]: no response arrived.
    pub async fn send(
        &self,
        messages: &[Message],
        provider: Provider,
        model: &str,
    ) -> ChatResult<String> {
        let request = RequestBuilder::new(&self.config).build(messages, provider, model)?;

        log_info!(
            provider = %provider,
            model = %model,
            message_count = messages.len(),
            "Sending chat request"
        );

        let start_time = Instant::now();
        let response = self.transport.execute(request).await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        if response.status != SUCCESS_STATUS {
            log_error!(
                provider = %provider,
                status = response.status,
                duration_ms = duration_ms,
                error_body = %body_preview(&response.body),
                "API request failed"
            );
            return Err(ChatError::api_error(response.status));
        }

        let text = ResponseParser::parse(&response.body, provider)?;

        log_info!(
            provider = %provider,
            model = %model,
            duration_ms = duration_ms,
            response_length = text.len(),
            "Chat request completed"
        );

        Ok(text)
    }

    /// Send `messages` using the conversation's provider and model.
    pub async fn send_conversation(
        &self,
        conversation: &Conversation,
        messages: &[Message],
    ) -> ChatResult<String> {
        self.send(messages, conversation.provider(), conversation.model())
            .await
    }
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
