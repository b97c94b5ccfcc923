//! Request extractors and middleware layers.
//!
//! - [`htmx::HxRequest`] -- Detects partial-update requests (`HX-Request: true`).
//! - [`api_key::require_api_key`] -- Placeholder `X-API-Key` gate.
//! - [`errors::negotiate_errors`] -- Renders error responses as HTML for browsers.

pub mod api_key;
pub mod errors;
pub mod htmx;
