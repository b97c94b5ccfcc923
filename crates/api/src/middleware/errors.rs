//! Content negotiation for error responses.
//!
//! Handlers and extractors fail with [`AppError`](crate::error::AppError),
//! whose response is the JSON envelope plus an [`ErrorReport`] extension.
//! This layer looks at what the client accepts and, for browsers and htmx,
//! replaces the JSON body with the error page or error fragment. The status
//! code is kept.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use minijinja::context;

use crate::error::ErrorReport;
use crate::middleware::htmx::ErrorFormat;
use crate::state::AppState;
use crate::views::{ERROR_FRAGMENT, ERROR_PAGE};

pub async fn negotiate_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let format = ErrorFormat::for_request(request.headers());
    let response = next.run(request).await;

    let template = match format {
        ErrorFormat::Json => return response,
        ErrorFormat::Page => ERROR_PAGE,
        ErrorFormat::Fragment => ERROR_FRAGMENT,
    };

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    let ctx = context! {
        title => "Error",
        status => report.status.as_u16(),
        message => &report.message,
    };

    match state.views.render(template, ctx) {
        Ok(html) => {
            let mut rendered = (report.status, html).into_response();
            rendered.extensions_mut().insert(report);
            rendered
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to render error page, falling back to JSON");
            response
        }
    }
}
