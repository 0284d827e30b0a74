//! Turn handling on top of a store and a service
//!
//! A [`ChatSession`] reproduces what a chat front-end does for each send: persist the
//! user's message, title the conversation after its first message, ask the provider
//! and append the reply. A failed turn keeps the user's message and appends nothing.

use crate::client::ChatService;
use crate::core_types::{ContentType, Message, MessageRole};
use crate::error::{ChatError, ChatResult};
use crate::logging::{log_info, log_warn};
use crate::store::ConversationStore;
use uuid::Uuid;

#[derive(Debug)]
pub struct ChatSession {
    store: ConversationStore,
    service: ChatService,
}

impl ChatSession {
    pub fn new(service: ChatService) -> Self {
        Self::with_store(service, ConversationStore::new())
    }

    pub fn with_store(service: ChatService, store: ConversationStore) -> Self {
        Self { store, service }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConversationStore {
        &mut self.store
    }

    pub fn service(&self) -> &ChatService {
        &self.service
    }

    /// Run one turn in `conversation_id` and return the stored assistant message.
    ///
    /// `text` is trimmed. `&mut self` keeps one turn in flight per session.
    ///
    /// # Errors
    ///
    /// - [`ChatError::EmptyMessage`] if the trimmed text is empty and no image is
    ///   attached. Nothing is stored.
    /// - [`ChatError::ConversationNotFound`] for an unknown conversation.
    /// - Any error from [`ChatService::send`]. The user message stays stored.
    pub async fn send_turn(
        &mut self,
        conversation_id: Uuid,
        text: &str,
        image: Option<Vec<u8>>,
    ) -> ChatResult<Message> {
        let text = text.trim();
        if text.is_empty() && image.is_none() {
            return Err(ChatError::EmptyMessage);
        }

        let conversation = self.store.conversation(conversation_id)?.clone();

        let mut user_message = Message::user(conversation_id, text);
        if let Some(image) = image {
            // A chat turn with an attachment is always multimodal, even without text
            user_message = user_message.with_image(image);
            user_message.content_type = ContentType::Multimodal;
        }
        self.store.insert_message(user_message)?;

        if self.store.message_count(conversation_id) == 1 {
            self.store.derive_title(conversation_id, text)?;
        }

        let history: Vec<Message> = self
            .store
            .messages(conversation_id)?
            .into_iter()
            .cloned()
            .collect();

        let reply = match self.service.send_conversation(&conversation, &history).await {
            Ok(reply) => reply,
            Err(e) => {
                log_warn!(
                    conversation_id = %conversation_id,
                    error = %e,
                    "Turn failed, no assistant message appended"
                );
                return Err(e);
            }
        };

        let assistant = Message::new(MessageRole::Assistant, reply, conversation_id);
        let stored = self.store.insert_message(assistant)?.clone();

        log_info!(
            conversation_id = %conversation_id,
            message_count = self.store.message_count(conversation_id),
            "Turn completed"
        );

        Ok(stored)
    }
}
