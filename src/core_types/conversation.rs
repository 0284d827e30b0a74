//! Conversation metadata
//!
//! A conversation owns no message list of its own; messages point back at it
//! through their `conversation_id` and are looked up by that id.

use crate::error::{ChatError, ChatResult};
use crate::providers::Provider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to a conversation before its first user message.
pub const DEFAULT_TITLE: &str = "New Conversation";

/// Titles derived from a message keep at most this many characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// A chat thread bound to one provider/model pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    provider: Provider,
    model: String,
}

impl Conversation {
    /// Create a conversation, rejecting models the provider does not offer.
    pub fn new(provider: Provider, model: impl Into<String>) -> ChatResult<Self> {
        let model = model.into();
        if !provider.supports_model(&model) {
            return Err(ChatError::unknown_model(provider, model));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            created_at: now,
            updated_at: now,
            provider,
            model,
        })
    }

    /// Create a conversation on the provider's default model.
    pub fn with_default_model(provider: Provider) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            created_at: now,
            updated_at: now,
            provider,
            model: provider.default_model().to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    /// Set the title from a user message: trimmed, first 50 characters.
    /// Blank text (an image-only message) leaves the title alone.
    pub fn derive_title(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.title = text.chars().take(TITLE_MAX_CHARS).collect();
        }
    }

    /// Switch provider and model for subsequent turns.
    pub fn set_model(&mut self, provider: Provider, model: impl Into<String>) -> ChatResult<()> {
        let model = model.into();
        if !provider.supports_model(&model) {
            return Err(ChatError::unknown_model(provider, model));
        }
        self.provider = provider;
        self.model = model;
        self.touch();
        Ok(())
    }

    /// Record activity on the conversation.
    pub fn touch(&mut self) {
        let now = Utc::now();
        // updated_at never moves backwards, even if the wall clock does
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}
