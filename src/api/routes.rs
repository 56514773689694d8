/*
 * Responsibility
 * - URL structure: / (welcome) and /health
 * - Unmatched paths get the JSON 404 body via fallback
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health::health, welcome::welcome};
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
