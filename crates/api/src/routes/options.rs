//! Application option routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use fakt_db::repositories::OptionRepository;
use fakt_shared::error::AppError;

use crate::{AppState, routes::error_response};

/// Creates the option routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/options/{lang}", get(list_options))
        .route("/options/{lang}/{key}", get(get_option))
        .route("/options/{lang}/{key}", put(set_option))
}

/// Request body for writing an option value.
#[derive(Debug, Deserialize)]
pub struct SetOptionRequest {
    /// The value to store; null clears it while keeping the row.
    pub value: Option<String>,
}

/// GET `/options/{lang}` - All options for a language.
async fn list_options(State(state): State<AppState>, Path(lang): Path<String>) -> impl IntoResponse {
    let repo = OptionRepository::new((*state.db).clone());

    match repo.list(&lang).await {
        Ok(options) => (StatusCode::OK, Json(json!({ "options": options }))).into_response(),
        Err(e) => {
            error!(error = %e, lang = %lang, "Failed to list options");
            error_response(&AppError::from(e))
        }
    }
}

/// GET `/options/{lang}/{key}` - One option value.
async fn get_option(
    State(state): State<AppState>,
    Path((lang, key)): Path<(String, String)>,
) -> impl IntoResponse {
    let repo = OptionRepository::new((*state.db).clone());

    match repo.get(&key, &lang).await {
        Ok(value) => (
            StatusCode::OK,
            Json(json!({ "key": key, "lang": lang, "value": value })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, lang = %lang, key = %key, "Failed to read option");
            error_response(&AppError::from(e))
        }
    }
}

/// PUT `/options/{lang}/{key}` - Write one option value.
async fn set_option(
    State(state): State<AppState>,
    Path((lang, key)): Path<(String, String)>,
    Json(body): Json<SetOptionRequest>,
) -> impl IntoResponse {
    let repo = OptionRepository::new((*state.db).clone());

    match repo.set(&key, &lang, body.value).await {
        Ok(()) => {
            info!(lang = %lang, key = %key, "Option written");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!(error = %e, lang = %lang, key = %key, "Failed to write option");
            error_response(&AppError::from(e))
        }
    }
}
