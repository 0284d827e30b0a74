//! Error types for chat operations.
//!
//! Every failure of a turn is reported as a [`ChatError`]. The orchestrator itself
//! only produces three kinds for well-formed HTTP exchanges:
//!
//! - [`ChatError::MissingCredential`]: the selected provider has no API key. Raised
//!   before any network call.
//! - [`ChatError::InvalidResponse`]: the provider answered `200` but the body did not
//!   have the expected shape.
//! - [`ChatError::ApiError`]: the provider answered with any status other than `200`.
//!
//! Transport failures, configuration problems and conversation bookkeeping errors
//! have their own variants. None of them is retried by this crate; the caller shows
//! [`ChatError::user_message`] and lets the user resend.
//!
//! # Example
//!
//! ```rust
//! use multi_chat::{ChatError, Provider};
//!
//! let err = ChatError::missing_credential(Provider::OpenAI);
//! assert_eq!(
//!     err.user_message(),
//!     "API key is missing. Please configure your API key in AI Models settings."
//! );
//! ```

use crate::logging::{log_error, log_warn};
use crate::providers::Provider;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (LLM providers, network issues).
    External,

    /// Internal bookkeeping errors (unknown conversation, invariant violations).
    Internal,

    /// Client errors (missing credentials, invalid input, configuration).
    ///
    /// The caller can fix these (configure a key, pick a known model, type a
    /// message).
    Client,

    /// Temporary failures where resending the turn may succeed.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,

    /// Expected failure (e.g., empty input).
    Info,
}

/// Convenient result type for chat operations.
pub type ChatResult<T> = std::result::Result<T, ChatError>;

/// Errors that can occur while sending a turn or managing conversations.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use multi_chat::ChatError;
///
/// let err = ChatError::api_error(429);
/// assert!(err.is_retryable());
/// ```
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `MissingCredential` | Client | No |
/// | `InvalidResponse` | External | No |
/// | `ApiError` | External / Transient | 408, 429 and 5xx |
/// | `RequestFailed` | External | Yes |
/// | `Timeout` | Transient | Yes |
/// | `ConfigurationError` | Client | No |
/// | `ConversationNotFound` | Internal | No |
/// | `UnknownModel` | Client | No |
/// | `EmptyMessage` | Client | No |
#[derive(Error, Debug)]
pub enum ChatError {
    /// No API key is configured for the provider.
    #[error("API key is missing for provider {provider}")]
    MissingCredential {
        /// The provider selected for the turn.
        provider: Provider,
    },

    /// The provider answered `200` with a body of the wrong shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Which step of the extraction failed.
        message: String,
    },

    /// The provider answered with a status other than `200`.
    #[error("API request failed with status code {status}")]
    ApiError {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The HTTP exchange itself failed (connection refused, DNS, TLS...).
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request timed out, either on the configured timeout or on one set on
    /// the underlying HTTP client.
    #[error("Request timed out{}", describe_timeout(.timeout))]
    Timeout {
        /// The configured timeout, when it is known.
        timeout: Option<Duration>,
    },

    /// Configuration is invalid or could not be loaded.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// No conversation with this id exists in the store.
    #[error("Conversation not found: {id}")]
    ConversationNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The model does not belong to the provider's registry entry.
    #[error("Model {model} is not available for provider {provider}")]
    UnknownModel {
        /// The provider the model was requested for.
        provider: Provider,
        /// The rejected model id.
        model: String,
    },

    /// A turn was sent with no text and no attachment.
    #[error("Message is empty")]
    EmptyMessage,
}

impl ChatError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential { .. } => ErrorCategory::Client,
            Self::InvalidResponse { .. } => ErrorCategory::External,
            Self::ApiError { status } if is_transient_status(*status) => ErrorCategory::Transient,
            Self::ApiError { .. } => ErrorCategory::External,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::ConversationNotFound { .. } => ErrorCategory::Internal,
            Self::UnknownModel { .. } => ErrorCategory::Client,
            Self::EmptyMessage => ErrorCategory::Client,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCredential { .. } => ErrorSeverity::Warning,
            Self::InvalidResponse { .. } => ErrorSeverity::Warning,
            Self::ApiError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::ConversationNotFound { .. } => ErrorSeverity::Error,
            Self::UnknownModel { .. } => ErrorSeverity::Warning,
            Self::EmptyMessage => ErrorSeverity::Info,
        }
    }

    /// Whether resending the same turn unchanged may succeed.
    ///
    /// The crate never retries on its own; this is a hint for the caller's UI.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError { status } => is_transient_status(*status),
            Self::RequestFailed { .. } | Self::Timeout { .. } => true,
            _ => false,
        }
    }

    /// Convert to a user-friendly message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential { .. } => {
                "API key is missing. Please configure your API key in AI Models settings."
                    .to_string()
            }
            Self::InvalidResponse { .. } => "Invalid response from AI service.".to_string(),
            Self::ApiError { status } => {
                format!("API request failed with status code {status}.")
            }
            Self::RequestFailed { .. } => {
                "Unable to communicate with AI service. Please try again.".to_string()
            }
            Self::Timeout { .. } => "Request timed out. Please try again.".to_string(),
            Self::ConfigurationError { .. } => {
                "AI service configuration issue. Please check your settings.".to_string()
            }
            Self::ConversationNotFound { .. } => "This conversation no longer exists.".to_string(),
            Self::UnknownModel { model, provider } => {
                format!("The model {model} is not available for {provider}.")
            }
            Self::EmptyMessage => "Type a message or attach an image first.".to_string(),
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn missing_credential(provider: Provider) -> Self {
        log_warn!(
            error_type = "missing_credential",
            provider = %provider,
            "No API key configured for provider"
        );
        Self::MissingCredential { provider }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "invalid_response",
            message = %message,
            "Provider response format invalid"
        );
        Self::InvalidResponse { message }
    }

    pub fn api_error(status: u16) -> Self {
        log_error!(
            error_type = "api_error",
            status = status,
            "Provider returned non-success status"
        );
        Self::ApiError { status }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Chat request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn timeout(timeout: Option<Duration>) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_ms = timeout.map(|t| t.as_millis() as u64),
            "Chat request timed out"
        );
        Self::Timeout { timeout }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Chat configuration invalid"
        );
        Self::ConfigurationError { message }
    }

    pub fn conversation_not_found(id: Uuid) -> Self {
        log_error!(
            error_type = "conversation_not_found",
            conversation_id = %id,
            "Conversation lookup failed"
        );
        Self::ConversationNotFound { id }
    }

    pub fn unknown_model(provider: Provider, model: impl Into<String>) -> Self {
        let model = model.into();
        log_warn!(
            error_type = "unknown_model",
            provider = %provider,
            model = %model,
            "Model not in provider registry"
        );
        Self::UnknownModel { provider, model }
    }
}

/// Statuses for which a manual resend is worth suggesting.
fn is_transient_status(status: u16) -> bool {
    status == 408 || status == 429 || (500..600).contains(&status)
}

fn describe_timeout(timeout: &Option<Duration>) -> String {
    match timeout {
        Some(timeout) => format!(" after {}ms", timeout.as_millis()),
        None => String::new(),
    }
}
