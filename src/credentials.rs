//! API key lookup
//!
//! [`CredentialStore`] is the single place that maps a [`Provider`] to its secret.
//! Keys are stored under each provider's `credential_key` (for example
//! `"OpenAIAPIKey"`). An absent or empty key means the provider is not configured.

use crate::error::{ChatError, ChatResult};
use crate::logging::log_debug;
use crate::providers::Provider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Key-value credential storage keyed by provider storage key.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialStore {
    keys: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with_key(mut self, provider: Provider, api_key: impl Into<String>) -> Self {
        self.set(provider, api_key);
        self
    }

    pub fn set(&mut self, provider: Provider, api_key: impl Into<String>) {
        self.keys
            .insert(provider.descriptor().credential_key.to_string(), api_key.into());
    }

    pub fn remove(&mut self, provider: Provider) {
        self.keys.remove(provider.descriptor().credential_key);
    }

    /// The stored key for `provider`, or an empty string when none is set.
    ///
    /// The value is returned as stored; no trimming or format checks.
    pub fn api_key(&self, provider: Provider) -> String {
        self.keys
            .get(provider.descriptor().credential_key)
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_configured(&self, provider: Provider) -> bool {
        !self.api_key(provider).is_empty()
    }

    /// Providers with a non-empty key, in registry order.
    pub fn configured_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|provider| self.is_configured(*provider))
            .collect()
    }

    /// Read every provider's key from its environment variable.
    pub fn from_env() -> Self {
        let mut store = Self::new();
        for provider in Provider::ALL {
            if let Ok(api_key) = std::env::var(provider.descriptor().env_var) {
                store.set(provider, api_key);
            }
        }
        log_debug!(
            configured = store.configured_providers().len(),
            "Loaded credentials from environment"
        );
        store
    }

    /// Parse a flat JSON object of storage key to secret.
    ///
    /// ```rust
    /// use multi_chat::{CredentialStore, Provider};
    ///
    /// let store = CredentialStore::from_json_str(r#"{"GroqAPIKey": "gsk-123"}"#).unwrap();
    /// assert_eq!(store.api_key(Provider::Groq), "gsk-123");
    /// assert_eq!(store.api_key(Provider::OpenAI), "");
    /// ```
    pub fn from_json_str(json: &str) -> ChatResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ChatError::configuration_error(format!("Invalid credentials JSON: {e}"))
        })
    }

    /// Load credentials from a JSON file (see [`from_json_str`](Self::from_json_str)).
    pub async fn from_json_file(path: impl AsRef<Path>) -> ChatResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            ChatError::configuration_error(format!(
                "Failed to read credentials file {}: {e}",
                path.display()
            ))
        })?;
        let store = Self::from_json_str(&json)?;
        log_debug!(
            path = %path.display(),
            configured = store.configured_providers().len(),
            "Loaded credentials from file"
        );
        Ok(store)
    }
}

// Secrets never reach the logs through Debug.
impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CredentialStore")
            .field("keys", &names)
            .finish()
    }
}
