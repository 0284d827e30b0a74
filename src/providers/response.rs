//! Provider response extraction
//!
//! The provider's [`ResponseShape`] decides where the assistant text is read from.
//! There is no fallback to the other shape: a body that does not match is an
//! invalid response, never an empty string.

use super::registry::{Provider, ResponseShape};
use super::types::{ChoicesResponse, ContentBlocksResponse};
use crate::error::{ChatError, ChatResult};
use crate::logging::{body_preview, log_debug, log_warn};

/// Extracts assistant text from successful provider responses.
pub struct ResponseParser;

impl ResponseParser {
    /// Extract the assistant text from a `200` response body.
    ///
    /// # Errors
    ///
    /// [`ChatError::InvalidResponse`] if the body is not JSON or any step of the
    /// expected path is missing, `null`, of the wrong type, or an empty array.
    pub fn parse(body: &str, provider: Provider) -> ChatResult<String> {
        let result = match provider.response_shape() {
            ResponseShape::Choices => Self::parse_choices(body),
            ResponseShape::ContentBlocks => Self::parse_content_blocks(body),
        };

        match &result {
            Ok(text) => log_debug!(
                provider = %provider,
                content_length = text.len(),
                "Extracted assistant text"
            ),
            Err(_) => log_warn!(
                provider = %provider,
                body = %body_preview(body),
                "Response body did not match expected shape"
            ),
        }

        result
    }

    /// `choices[0].message.content`
    fn parse_choices(body: &str) -> ChatResult<String> {
        let response: ChoicesResponse = serde_json::from_str(body)
            .map_err(|e| ChatError::invalid_response(format!("Malformed response body: {e}")))?;

        response
            .choices
            .ok_or_else(|| ChatError::invalid_response("Missing 'choices' array"))?
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::invalid_response("Empty 'choices' array"))?
            .message
            .ok_or_else(|| ChatError::invalid_response("Missing 'message' in first choice"))?
            .content
            .ok_or_else(|| ChatError::invalid_response("Missing 'content' in choice message"))
    }

    /// `content[0].text`
    fn parse_content_blocks(body: &str) -> ChatResult<String> {
        let response: ContentBlocksResponse = serde_json::from_str(body)
            .map_err(|e| ChatError::invalid_response(format!("Malformed response body: {e}")))?;

        response
            .content
            .ok_or_else(|| ChatError::invalid_response("Missing 'content' array"))?
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::invalid_response("Empty 'content' array"))?
            .text
            .ok_or_else(|| ChatError::invalid_response("Missing 'text' in first content block"))
    }
}
