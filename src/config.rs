//! Configuration for [`ChatService`](crate::ChatService)
//!
//! Everything the service needs is passed in through [`ChatConfig`] at construction
//! time; nothing is read from ambient global state afterwards.

use crate::credentials::CredentialStore;
use crate::error::{ChatError, ChatResult};
use crate::logging::log_debug;
use crate::providers::Provider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

/// Service-wide configuration.
#[derive(Debug, Clone, Default)]
pub struct ChatConfig {
    pub credentials: CredentialStore,
    pub params: ChatParams,
    /// Whole-request timeout. `None` leaves the HTTP client's default in place.
    pub request_timeout: Option<Duration>,
    /// Replacement endpoint URLs, e.g. for a proxy. Used verbatim.
    pub base_url_overrides: HashMap<Provider, String>,
}

impl ChatConfig {
    pub fn new(credentials: CredentialStore) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    pub fn with_params(mut self, params: ChatParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_base_url(mut self, provider: Provider, url: impl Into<String>) -> Self {
        self.base_url_overrides.insert(provider, url.into());
        self
    }

    /// Endpoint the request for `provider` is posted to.
    pub fn base_url(&self, provider: Provider) -> &str {
        self.base_url_overrides
            .get(&provider)
            .map(String::as_str)
            .unwrap_or_else(|| provider.base_url())
    }

    /// Build configuration from environment variables.
    ///
    /// Credentials come from each provider's variable (`OPENAI_API_KEY`, ...).
    /// Optional overrides: `CHAT_TEMPERATURE`, `CHAT_MAX_TOKENS`,
    /// `CHAT_REQUEST_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::ConfigurationError`] if an override is set but does not
    /// parse.
    pub fn from_env() -> ChatResult<Self> {
        let mut config = Self::new(CredentialStore::from_env());

        if let Some(temperature) = parse_env::<f64>("CHAT_TEMPERATURE")? {
            config.params.temperature = temperature;
        }
        if let Some(max_tokens) = parse_env::<u32>("CHAT_MAX_TOKENS")? {
            config.params.max_tokens = max_tokens;
        }
        if let Some(secs) = parse_env::<u64>("CHAT_REQUEST_TIMEOUT_SECS")? {
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        log_debug!(
            configured_providers = config.credentials.configured_providers().len(),
            temperature = config.params.temperature,
            max_tokens = config.params.max_tokens,
            timeout_secs = config.request_timeout.map(|t| t.as_secs()),
            "Chat configuration loaded from environment"
        );

        Ok(config)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> ChatResult<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            ChatError::configuration_error(format!("{name} has an invalid value: {raw}"))
        }),
        Err(_) => Ok(None),
    }
}
