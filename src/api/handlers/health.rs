/*
 * Responsibility
 * - GET /health: render the status report, mirror build fields into headers
 * - Always 200; every failure inside the report is absorbed as a default
 */
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};

use crate::services::status;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Response {
    tracing::debug!("health check requested");

    let rendered = status::render(&state.config, state.started_at);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert("x-build-commit", header_value(&rendered.commit));
    headers.insert("x-build-date", header_value(&rendered.build_date));

    (headers, rendered.body).into_response()
}

// Build metadata comes from a file or the environment; anything that is not a
// valid header value degrades to "unknown" instead of failing the response.
fn header_value(s: &str) -> HeaderValue {
    HeaderValue::from_str(s).unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}
