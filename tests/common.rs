//! Test helper utilities for multi-chat integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use multi_chat::{ChatConfig, ChatService, CredentialStore, Provider};
use serde_json::json;
use std::time::Duration;
use wiremock::{MockServer, ResponseTemplate};

/// Path every provider is redirected to on the mock server.
pub const CHAT_PATH: &str = "/chat";

pub fn test_key(provider: Provider) -> String {
    format!("test-{}-key", provider.as_str())
}

/// Credentials for every provider, all endpoints pointed at `server`.
pub fn mock_config(server: &MockServer) -> ChatConfig {
    Provider::ALL
        .into_iter()
        .fold(ChatConfig::new(all_credentials()), |config, provider| {
            config.with_base_url(provider, format!("{}{CHAT_PATH}", server.uri()))
        })
}

pub fn all_credentials() -> CredentialStore {
    Provider::ALL
        .into_iter()
        .fold(CredentialStore::new(), |store, provider| {
            store.with_key(provider, test_key(provider))
        })
}

/// Service using the real reqwest transport against `server`.
pub fn mock_service(server: &MockServer) -> ChatService {
    ChatService::new(mock_config(server))
}

pub fn mock_service_with_timeout(server: &MockServer, timeout: Duration) -> ChatService {
    ChatService::new(mock_config(server).with_request_timeout(timeout))
}

/// Success response in the shape `provider` answers with.
pub fn success_response(provider: Provider, text: &str) -> ResponseTemplate {
    let body = match provider {
        Provider::Anthropic => json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "text", "text": text }],
            "stop_reason": "end_turn"
        }),
        _ => json!({
            "id": "chatcmpl-01",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": text },
                "finish_reason": "stop"
            }]
        }),
    };
    ResponseTemplate::new(200).set_body_json(body)
}
