//! Partial-update protocol detection.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use axum::http::HeaderMap;

/// Header htmx sets on every request it issues.
pub const HX_REQUEST: &str = "hx-request";

/// Whether the request came from htmx and will splice a fragment into the
/// current page instead of navigating.
///
/// ```ignore
/// async fn create(HxRequest(partial): HxRequest, ...) -> AppResult<Response> {
///     if partial { /* fragment */ } else { /* redirect */ }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(HxRequest(is_hx_request(&parts.headers)))
    }
}

pub fn is_hx_request(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Whether the `Accept` header lists `text/html`.
pub fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"))
}

/// How an error response should be represented for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    Json,
    Page,
    Fragment,
}

impl ErrorFormat {
    pub fn for_request(headers: &HeaderMap) -> Self {
        if is_hx_request(headers) {
            ErrorFormat::Fragment
        } else if accepts_html(headers) {
            ErrorFormat::Page
        } else {
            ErrorFormat::Json
        }
    }
}
