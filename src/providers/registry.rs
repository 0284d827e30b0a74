//! Static registry of supported chat providers
//!
//! Each [`Provider`] tag maps to exactly one [`ProviderDescriptor`]. Everything
//! provider-specific (endpoint, authentication headers, response shape, where the
//! credential lives) is read from the descriptor, so call sites never switch on the
//! provider themselves.

use crate::error::ChatError;
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported hosted LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    Groq,
    Gemini,
    Cerebras,
    Mistral,
    OpenRouter,
}

/// How a provider expects the API key to be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// The key goes in a provider-specific header, alongside a fixed API version
    /// header. No `Authorization` header is sent.
    ApiKeyHeader {
        key_header: &'static str,
        version_header: &'static str,
        version: &'static str,
    },
}

/// Where the assistant text lives in a successful response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// OpenAI-compatible: `choices[0].message.content`
    Choices,
    /// Anthropic Messages API: `content[0].text`
    ContentBlocks,
}

/// Compile-time description of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDescriptor {
    /// Human-readable name, also the provider's `Display` form.
    pub display_name: &'static str,
    /// Lowercase identifier used in serialized data.
    pub id: &'static str,
    /// Full chat endpoint URL; requests are posted here as is.
    pub base_url: &'static str,
    pub default_model: &'static str,
    pub available_models: &'static [&'static str],
    pub auth_scheme: AuthScheme,
    pub response_shape: ResponseShape,
    /// Key under which the API key is stored in a [`CredentialStore`](crate::CredentialStore).
    pub credential_key: &'static str,
    /// Environment variable read by [`CredentialStore::from_env`](crate::CredentialStore::from_env).
    pub env_var: &'static str,
}

const OPENAI: ProviderDescriptor = ProviderDescriptor {
    display_name: "OpenAI",
    id: "openai",
    base_url: "https://api.openai.com/v1/chat/completions",
    default_model: "gpt-4.1-mini",
    available_models: &["gpt-4.1", "gpt-4.1-mini", "gpt-4.1-nano", "gpt-4o", "gpt-4o-mini"],
    auth_scheme: AuthScheme::Bearer,
    response_shape: ResponseShape::Choices,
    credential_key: "OpenAIAPIKey",
    env_var: "OPENAI_API_KEY",
};

const ANTHROPIC: ProviderDescriptor = ProviderDescriptor {
    display_name: "Anthropic",
    id: "anthropic",
    base_url: "https://api.anthropic.com/v1/messages",
    default_model: "claude-sonnet-4-0",
    available_models: &[
        "claude-opus-4-0",
        "claude-sonnet-4-0",
        "claude-3-7-sonnet-latest",
        "claude-3-5-haiku-latest",
    ],
    auth_scheme: AuthScheme::ApiKeyHeader {
        key_header: "x-api-key",
        version_header: "anthropic-version",
        version: "2023-06-01",
    },
    response_shape: ResponseShape::ContentBlocks,
    credential_key: "AnthropicAPIKey",
    env_var: "ANTHROPIC_API_KEY",
};

const GROQ: ProviderDescriptor = ProviderDescriptor {
    display_name: "Groq",
    id: "groq",
    base_url: "https://api.groq.com/openai/v1/chat/completions",
    default_model: "llama-3.3-70b-versatile",
    available_models: &[
        "llama-3.1-8b-instant",
        "llama-3.3-70b-versatile",
        "moonshotai/kimi-k2-instruct",
        "qwen/qwen3-32b",
        "openai/gpt-oss-120b",
    ],
    auth_scheme: AuthScheme::Bearer,
    response_shape: ResponseShape::Choices,
    credential_key: "GroqAPIKey",
    env_var: "GROQ_API_KEY",
};

const GEMINI: ProviderDescriptor = ProviderDescriptor {
    display_name: "Gemini",
    id: "gemini",
    base_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
    default_model: "gemini-2.5-flash",
    available_models: &[
        "gemini-2.5-pro",
        "gemini-2.5-flash",
        "gemini-2.5-flash-lite",
        "gemini-2.0-flash",
        "gemini-2.5-flash-image-preview",
    ],
    auth_scheme: AuthScheme::Bearer,
    response_shape: ResponseShape::Choices,
    credential_key: "GeminiAPIKey",
    env_var: "GEMINI_API_KEY",
};

const CEREBRAS: ProviderDescriptor = ProviderDescriptor {
    display_name: "Cerebras",
    id: "cerebras",
    base_url: "https://api.cerebras.ai/v1/chat/completions",
    default_model: "llama-3.3-70b",
    available_models: &["llama3.1-8b", "llama-3.3-70b", "qwen-3-32b", "gpt-oss-120b"],
    auth_scheme: AuthScheme::Bearer,
    response_shape: ResponseShape::Choices,
    credential_key: "CerebrasAPIKey",
    env_var: "CEREBRAS_API_KEY",
};

const MISTRAL: ProviderDescriptor = ProviderDescriptor {
    display_name: "Mistral",
    id: "mistral",
    base_url: "https://api.mistral.ai/v1/chat/completions",
    default_model: "mistral-large-latest",
    available_models: &[
        "mistral-large-latest",
        "mistral-medium-latest",
        "mistral-small-latest",
        "codestral-latest",
    ],
    auth_scheme: AuthScheme::Bearer,
    response_shape: ResponseShape::Choices,
    credential_key: "MistralAPIKey",
    env_var: "MISTRAL_API_KEY",
};

const OPENROUTER: ProviderDescriptor = ProviderDescriptor {
    display_name: "OpenRouter",
    id: "openrouter",
    base_url: "https://openrouter.ai/api/v1/chat/completions",
    default_model: "openai/gpt-4o-mini",
    available_models: &[
        "openai/gpt-4o-mini",
        "anthropic/claude-sonnet-4",
        "google/gemini-2.5-flash",
        "meta-llama/llama-3.3-70b-instruct",
        "deepseek/deepseek-chat",
    ],
    auth_scheme: AuthScheme::Bearer,
    response_shape: ResponseShape::Choices,
    credential_key: "OpenRouterAPIKey",
    env_var: "OPENROUTER_API_KEY",
};

impl Provider {
    /// Every provider, in registry order.
    pub const ALL: [Provider; 7] = [
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Groq,
        Provider::Gemini,
        Provider::Cerebras,
        Provider::Mistral,
        Provider::OpenRouter,
    ];

    /// The static descriptor for this provider.
    pub fn descriptor(self) -> &'static ProviderDescriptor {
        match self {
            Provider::OpenAI => &OPENAI,
            Provider::Anthropic => &ANTHROPIC,
            Provider::Groq => &GROQ,
            Provider::Gemini => &GEMINI,
            Provider::Cerebras => &CEREBRAS,
            Provider::Mistral => &MISTRAL,
            Provider::OpenRouter => &OPENROUTER,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.descriptor().id
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    pub fn base_url(self) -> &'static str {
        self.descriptor().base_url
    }

    pub fn default_model(self) -> &'static str {
        self.descriptor().default_model
    }

    pub fn available_models(self) -> &'static [&'static str] {
        self.descriptor().available_models
    }

    pub fn auth_scheme(self) -> AuthScheme {
        self.descriptor().auth_scheme
    }

    pub fn response_shape(self) -> ResponseShape {
        self.descriptor().response_shape
    }

    /// Whether `model` is one of this provider's selectable models.
    pub fn supports_model(self, model: &str) -> bool {
        self.available_models().contains(&model)
    }

    /// Look up a provider by id or display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Provider> {
        let name = name.trim();
        Self::ALL.into_iter().find(|provider| {
            let descriptor = provider.descriptor();
            descriptor.id.eq_ignore_ascii_case(name)
                || descriptor.display_name.eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::from_name(s).ok_or_else(|| {
            log_debug!(name = %s, "Provider name did not match the registry");
            ChatError::ConfigurationError {
                message: format!("Unknown provider: {s}"),
            }
        })
    }
}

/// Short description shown next to a model in a picker.
pub fn model_description(model: &str) -> Option<&'static str> {
    if model.contains("image") {
        Some("Can generate images")
    } else if model.contains("pro") {
        Some("Most capable")
    } else if model.contains("flash") {
        Some("Fast and efficient")
    } else if model.contains("lite") {
        Some("Ultra fast")
    } else {
        None
    }
}
