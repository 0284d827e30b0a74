//! Chat messages exchanged within a conversation
//!
//! Messages are provider-agnostic. Only the role and the text content are sent to a
//! provider; image and audio payloads stay local to the conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message roles for chat interactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl MessageRole {
    /// The role string used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::System => "system",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of payload a message carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Image,
    Audio,
    /// Text plus an image
    Multimodal,
}

/// A single message of a conversation.
///
/// Messages are not edited after creation. The builder methods below consume the
/// message and are meant to be used before it is handed to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub conversation_id: Uuid,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_data: Option<Vec<u8>>,
    /// Free-form JSON string for caller-specific data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl Message {
    /// Create a text message timestamped now
    pub fn new(role: MessageRole, content: impl Into<String>, conversation_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            conversation_id,
            content_type: ContentType::Text,
            image_data: None,
            audio_data: None,
            metadata: None,
        }
    }

    pub fn user(conversation_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content, conversation_id)
    }

    pub fn assistant(conversation_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content, conversation_id)
    }

    pub fn system(conversation_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content, conversation_id)
    }

    /// Attach an image. The message becomes `Multimodal` when it also has text.
    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.content_type = if self.content.is_empty() {
            ContentType::Image
        } else {
            ContentType::Multimodal
        };
        self.image_data = Some(image);
        self
    }

    /// Attach an audio clip. Only an otherwise empty message becomes `Audio`.
    pub fn with_audio(mut self, audio: Vec<u8>) -> Self {
        if self.content.is_empty() && self.image_data.is_none() {
            self.content_type = ContentType::Audio;
        }
        self.audio_data = Some(audio);
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn has_attachment(&self) -> bool {
        self.image_data.is_some() || self.audio_data.is_some()
    }
}
