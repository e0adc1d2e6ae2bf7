//! API route definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;

use fakt_shared::error::AppError;

use crate::AppState;

pub mod company;
pub mod customers;
pub mod health;
pub mod invoices;
pub mod options;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(invoices::routes())
        .merge(customers::routes())
        .merge(company::routes())
        .merge(options::routes())
}

/// Renders an application error as a JSON error response.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}
