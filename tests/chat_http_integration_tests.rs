//! Integration Tests for ChatService over HTTP
//!
//! UNIT UNDER TEST: ChatService with ReqwestTransport
//!
//! BUSINESS RESPONSIBILITY:
//!   - Send one POST per call with the provider's authentication headers
//!   - Return the assistant text only for 200 responses with the expected shape
//!   - Map transport failures to RequestFailed or Timeout
//!
//! TEST COVERAGE:
//!   - Bearer and x-api-key header schemes on the wire
//!   - Request body contents
//!   - Non-200 statuses, malformed bodies, timeouts, refused connections

mod common;

use common::*;
use multi_chat::{
    ChatConfig, ChatError, ChatService, CredentialStore, Message, Provider, ReqwestTransport,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn one_user_message(text: &str) -> Vec<Message> {
    vec![Message::user(Uuid::new_v4(), text)]
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_openai_bearer_round_trip() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("authorization", "Bearer test-openai-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4.1-mini",
            "messages": [{ "role": "user", "content": "Hi" }],
            "temperature": 0.7,
            "max_tokens": 4096
        })))
        .respond_with(success_response(Provider::OpenAI, "hello"))
        .expect(1)
        .mount(&server)
        .await;

    // Act
    let reply = mock_service(&server)
        .send(&one_user_message("Hi"), Provider::OpenAI, "gpt-4.1-mini")
        .await;

    // Assert
    assert_eq!(reply.unwrap(), "hello");
}

#[tokio::test]
async fn test_anthropic_header_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("x-api-key", "test-anthropic-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(success_response(Provider::Anthropic, "hi there"))
        .expect(1)
        .mount(&server)
        .await;

    let reply = mock_service(&server)
        .send(&one_user_message("Hello"), Provider::Anthropic, "claude-sonnet-4-0")
        .await;

    assert_eq!(reply.unwrap(), "hi there");
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_every_bearer_provider_sends_its_own_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header_exists("authorization"))
        .respond_with(success_response(Provider::OpenAI, "pong"))
        .mount(&server)
        .await;
    let service = mock_service(&server);

    let bearer: Vec<Provider> = Provider::ALL
        .into_iter()
        .filter(|p| *p != Provider::Anthropic)
        .collect();
    for provider in &bearer {
        let reply = service
            .send(&one_user_message("ping"), *provider, provider.default_model())
            .await
            .unwrap();
        assert_eq!(reply, "pong");
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), bearer.len());
    for (request, provider) in requests.iter().zip(&bearer) {
        let expected = format!("Bearer {}", test_key(*provider));
        assert_eq!(request.headers["authorization"], expected.as_str());
    }
}

// ============================================================================
// Failure Paths
// ============================================================================

#[tokio::test]
async fn test_missing_credential_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config = ChatConfig::new(CredentialStore::new())
        .with_base_url(Provider::Groq, format!("{}{CHAT_PATH}", server.uri()));

    let result = ChatService::new(config)
        .send(&one_user_message("Hi"), Provider::Groq, "llama-3.1-8b-instant")
        .await;

    assert!(matches!(
        result,
        Err(ChatError::MissingCredential { provider: Provider::Groq })
    ));
}

#[tokio::test]
async fn test_rate_limit_is_api_error_even_with_valid_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"choices":[{"message":{"content":"hello"}}]})),
        )
        .mount(&server)
        .await;

    let err = mock_service(&server)
        .send(&one_user_message("Hi"), Provider::OpenAI, "gpt-4.1")
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::ApiError { status: 429 }));
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "API request failed with status code 429");
}

#[tokio::test]
async fn test_unauthorized_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error":{"message":"Invalid API key"}})),
        )
        .mount(&server)
        .await;

    let err = mock_service(&server)
        .send(&one_user_message("Hi"), Provider::Mistral, "mistral-large-latest")
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::ApiError { status: 401 }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = mock_service(&server)
        .send(&one_user_message("Hi"), Provider::Cerebras, "llama-3.3-70b")
        .await;

    assert!(matches!(result, Err(ChatError::InvalidResponse { .. })));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            success_response(Provider::Gemini, "too late").set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = mock_service_with_timeout(&server, Duration::from_secs(1))
        .send(&one_user_message("Hi"), Provider::Gemini, "gemini-2.5-flash")
        .await;

    match result {
        Err(ChatError::Timeout { timeout }) => assert_eq!(timeout, Some(Duration::from_secs(1))),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_sub_second_timeout_is_reported_in_millis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            success_response(Provider::OpenAI, "too late").set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = mock_service_with_timeout(&server, Duration::from_millis(200))
        .send(&one_user_message("Hi"), Provider::OpenAI, "gpt-4.1-nano")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Request timed out after 200ms");
}

#[tokio::test]
async fn test_client_level_timeout_is_still_a_timeout() {
    // Arrange: the deadline lives on the reqwest client, not on the transport
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            success_response(Provider::Groq, "too late").set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let transport = ReqwestTransport::with_client(client, None);
    let service = ChatService::with_transport(mock_config(&server), Arc::new(transport));

    // Act
    let result = service
        .send(&one_user_message("Hi"), Provider::Groq, "llama-3.1-8b-instant")
        .await;

    // Assert
    assert!(matches!(result, Err(ChatError::Timeout { timeout: None })));
}

#[tokio::test]
async fn test_refused_connection_is_request_failed() {
    let config = ChatConfig::new(all_credentials())
        .with_base_url(Provider::OpenRouter, "http://127.0.0.1:1/chat");

    let err = ChatService::new(config)
        .send(&one_user_message("Hi"), Provider::OpenRouter, "openai/gpt-4o-mini")
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::RequestFailed { .. }));
    assert!(err.is_retryable());
}
