//! In-memory conversation store
//!
//! Holds conversations and their messages and enforces the data-model rules:
//! every message belongs to an existing conversation, every conversation uses a
//! model from the provider registry, and messages come back in timestamp order.
//! All mutation goes through `&mut self`, so there is exactly one writer.

use crate::core_types::{Conversation, Message};
use crate::error::{ChatError, ChatResult};
use crate::logging::{log_debug, log_trace};
use crate::providers::Provider;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredMessage {
    /// Insertion counter, used only to order messages with equal timestamps.
    seq: u64,
    message: Message,
}

#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: HashMap<Uuid, Conversation>,
    messages: Vec<StoredMessage>,
    next_seq: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a conversation on `provider`/`model`.
    pub fn create_conversation(
        &mut self,
        provider: Provider,
        model: &str,
    ) -> ChatResult<&Conversation> {
        let conversation = Conversation::new(provider, model)?;
        self.insert_conversation(conversation)
    }

    /// Store an already built conversation, replacing one with the same id.
    ///
    /// Conversations restored through serde bypass [`Conversation::new`], so the
    /// provider/model pair is checked again here.
    pub fn insert_conversation(
        &mut self,
        conversation: Conversation,
    ) -> ChatResult<&Conversation> {
        if !conversation.provider().supports_model(conversation.model()) {
            return Err(ChatError::unknown_model(
                conversation.provider(),
                conversation.model(),
            ));
        }

        let id = conversation.id();
        log_debug!(
            conversation_id = %id,
            provider = %conversation.provider(),
            model = %conversation.model(),
            "Stored conversation"
        );
        self.conversations.insert(id, conversation);
        self.conversation(id)
    }

    pub fn conversation(&self, id: Uuid) -> ChatResult<&Conversation> {
        self.conversations
            .get(&id)
            .ok_or_else(|| ChatError::conversation_not_found(id))
    }

    fn conversation_mut(&mut self, id: Uuid) -> ChatResult<&mut Conversation> {
        self.conversations
            .get_mut(&id)
            .ok_or_else(|| ChatError::conversation_not_found(id))
    }

    /// All conversations, most recently updated first.
    pub fn conversations(&self) -> Vec<&Conversation> {
        let mut conversations: Vec<&Conversation> = self.conversations.values().collect();
        conversations.sort_by(|a, b| {
            b.updated_at()
                .cmp(&a.updated_at())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
        conversations
    }

    /// Store a message and mark its conversation as updated.
    pub fn insert_message(&mut self, message: Message) -> ChatResult<&Message> {
        self.conversation_mut(message.conversation_id)?.touch();

        let seq = self.next_seq;
        self.next_seq += 1;
        log_trace!(
            conversation_id = %message.conversation_id,
            message_id = %message.id,
            role = %message.role,
            seq = seq,
            "Stored message"
        );
        self.messages.push(StoredMessage { seq, message });

        let index = self.messages.len() - 1;
        Ok(&self.messages[index].message)
    }

    /// Messages of a conversation in timestamp order.
    pub fn messages(&self, conversation_id: Uuid) -> ChatResult<Vec<&Message>> {
        self.conversation(conversation_id)?;

        let mut stored: Vec<&StoredMessage> = self
            .messages
            .iter()
            .filter(|stored| stored.message.conversation_id == conversation_id)
            .collect();
        stored.sort_by(|a, b| {
            a.message
                .timestamp
                .cmp(&b.message.timestamp)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(stored.into_iter().map(|stored| &stored.message).collect())
    }

    pub fn message_count(&self, conversation_id: Uuid) -> usize {
        self.messages
            .iter()
            .filter(|stored| stored.message.conversation_id == conversation_id)
            .count()
    }

    /// Delete every message of a conversation, keeping the conversation itself.
    /// Returns how many messages were removed.
    pub fn clear_messages(&mut self, conversation_id: Uuid) -> ChatResult<usize> {
        self.conversation(conversation_id)?;

        let before = self.messages.len();
        self.messages
            .retain(|stored| stored.message.conversation_id != conversation_id);
        let removed = before - self.messages.len();

        log_debug!(
            conversation_id = %conversation_id,
            removed = removed,
            "Cleared conversation messages"
        );
        Ok(removed)
    }

    /// Delete a conversation together with its messages.
    pub fn delete_conversation(&mut self, conversation_id: Uuid) -> ChatResult<Conversation> {
        let conversation = self
            .conversations
            .remove(&conversation_id)
            .ok_or_else(|| ChatError::conversation_not_found(conversation_id))?;
        self.messages
            .retain(|stored| stored.message.conversation_id != conversation_id);

        log_debug!(conversation_id = %conversation_id, "Deleted conversation");
        Ok(conversation)
    }

    pub fn rename(&mut self, conversation_id: Uuid, title: impl Into<String>) -> ChatResult<()> {
        self.conversation_mut(conversation_id)?.rename(title);
        Ok(())
    }

    pub fn set_model(
        &mut self,
        conversation_id: Uuid,
        provider: Provider,
        model: &str,
    ) -> ChatResult<()> {
        self.conversation_mut(conversation_id)?
            .set_model(provider, model)
    }

    pub(crate) fn derive_title(&mut self, conversation_id: Uuid, text: &str) -> ChatResult<()> {
        self.conversation_mut(conversation_id)?.derive_title(text);
        Ok(())
    }
}
