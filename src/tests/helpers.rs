//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::client::ChatService;
use crate::config::ChatConfig;
use crate::credentials::CredentialStore;
use crate::providers::Provider;
use crate::transport::{HttpResponse, MockHttpTransport};
use serde_json::json;
use std::sync::Arc;

/// Credentials with a distinct key for every provider: `test-<id>-key`.
pub fn all_test_credentials() -> CredentialStore {
    Provider::ALL
        .into_iter()
        .fold(CredentialStore::new(), |store, provider| {
            store.with_key(provider, test_key(provider))
        })
}

pub fn test_key(provider: Provider) -> String {
    format!("test-{}-key", provider.as_str())
}

pub fn test_config() -> ChatConfig {
    ChatConfig::new(all_test_credentials())
}

/// OpenAI-compatible success body carrying `text`.
pub fn choices_body(text: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7 }
    })
    .to_string()
}

/// Anthropic Messages API success body carrying `text`.
pub fn content_blocks_body(text: &str) -> String {
    json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "text", "text": text }],
        "model": "claude-sonnet-4-0",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 5, "output_tokens": 2 }
    })
    .to_string()
}

pub fn http_response(status: u16, body: impl Into<String>) -> HttpResponse {
    HttpResponse {
        status,
        body: body.into(),
    }
}

/// Mock transport that must be called exactly once and answers with `status`/`body`.
pub fn transport_answering(status: u16, body: String) -> MockHttpTransport {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_execute()
        .times(1)
        .returning(move |_| Ok(http_response(status, body.clone())));
    transport
}

/// Mock transport that fails the test if it is ever called.
pub fn transport_never_called() -> MockHttpTransport {
    let mut transport = MockHttpTransport::new();
    transport.expect_execute().times(0);
    transport
}

pub fn service_with(config: ChatConfig, transport: MockHttpTransport) -> ChatService {
    ChatService::with_transport(config, Arc::new(transport))
}
