//! Provider request construction
//!
//! Turns a uniform message list into the HTTP request a provider expects. Only the
//! authentication headers differ between providers; the body is the same for all.

use super::registry::{AuthScheme, Provider};
use super::types::{ChatRequestBody, WireMessage};
use crate::config::ChatConfig;
use crate::core_types::Message;
use crate::error::{ChatError, ChatResult};
use crate::logging::log_debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;

/// Everything needed to issue one chat call.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub provider: Provider,
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: ChatRequestBody,
}

/// Builds [`ChatRequest`]s from a [`ChatConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    config: &'a ChatConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ChatConfig) -> Self {
        Self { config }
    }

    /// Build the request for `messages` against `provider`/`model`.
    ///
    /// # Errors
    ///
    /// - [`ChatError::MissingCredential`] if the provider has no API key. Nothing
    ///   else is built in that case.
    /// - [`ChatError::ConfigurationError`] if the key cannot be used as a header
    ///   value.
    pub fn build(
        &self,
        messages: &[Message],
        provider: Provider,
        model: &str,
    ) -> ChatResult<ChatRequest> {
        let api_key = self.config.credentials.api_key(provider);
        if api_key.is_empty() {
            return Err(ChatError::missing_credential(provider));
        }

        let headers = build_auth_headers(provider.auth_scheme(), &api_key)?;
        let body = ChatRequestBody {
            model: model.to_string(),
            messages: to_wire_messages(messages),
            temperature: self.config.params.temperature,
            max_tokens: self.config.params.max_tokens,
        };
        let url = self.config.base_url(provider).to_string();

        log_debug!(
            provider = %provider,
            model = %model,
            url = %url,
            message_count = body.messages.len(),
            "Built chat request"
        );

        Ok(ChatRequest {
            provider,
            method: Method::POST,
            url,
            headers,
            body,
        })
    }
}

/// JSON content type plus the authentication headers of `scheme`.
///
/// The key is marked sensitive so it is redacted from `Debug` output.
pub fn build_auth_headers(scheme: AuthScheme, api_key: &str) -> ChatResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    match scheme {
        AuthScheme::Bearer => {
            headers.insert(AUTHORIZATION, secret_header_value(&format!("Bearer {api_key}"))?);
        }
        AuthScheme::ApiKeyHeader {
            key_header,
            version_header,
            version,
        } => {
            headers.insert(
                HeaderName::from_static(key_header),
                secret_header_value(api_key)?,
            );
            headers.insert(
                HeaderName::from_static(version_header),
                HeaderValue::from_static(version),
            );
        }
    }

    Ok(headers)
}

fn secret_header_value(value: &str) -> ChatResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| ChatError::configuration_error(format!("Invalid API key format: {e}")))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Role and text of each message, in the given order. Attachments are dropped.
pub fn to_wire_messages(messages: &[Message]) -> Vec<WireMessage> {
    messages
        .iter()
        .map(|message| WireMessage {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        })
        .collect()
}
