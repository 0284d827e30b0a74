//! Provider registry and the request/response adapters built on it
//!
//! - **registry**: the closed set of providers and their static descriptors
//! - **request**: uniform messages → provider HTTP request
//! - **response**: provider response body → assistant text
//! - **types**: shared wire structures
//!
//! ```text
//! registry.rs   <- endpoint, auth scheme, response shape per provider
//!    |      |
//! request.rs  response.rs
//! ```

pub mod registry;
pub mod request;
pub mod response;
pub mod types;

#[cfg(test)]
mod tests;

pub use registry::{model_description, AuthScheme, Provider, ProviderDescriptor, ResponseShape};
pub use request::{build_auth_headers, to_wire_messages, ChatRequest, RequestBuilder};
pub use response::ResponseParser;
pub use types::{ChatRequestBody, WireMessage};
