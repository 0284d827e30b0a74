//! Provider Tests Module
//!
//! Pure tests for the provider layer; nothing here touches the network.
//!
//! - `registry.rs` - descriptor table consistency and name lookup
//! - `request.rs` - header schemes and request body construction
//! - `response.rs` - response shape extraction and hard failures
//!
//! HTTP tests against a mock server live in the `tests/` directory.
