//! Company profile route.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use fakt_db::repositories::{CompanyProfile, CompanyRepository};
use fakt_shared::error::AppError;

use crate::{AppState, routes::error_response};

/// Creates the company routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/company", get(get_company))
}

/// The book's own business details.
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    /// Registered company identifier.
    pub id: String,
    /// Company name.
    pub name: String,
    /// Postal address, newline separated.
    pub address: String,
    /// Contact email address.
    pub email: String,
    /// Website URL.
    pub url: String,
    /// Phone number.
    pub phone: String,
    /// Bank account number.
    pub bank_account_number: String,
}

impl From<CompanyProfile> for CompanyResponse {
    fn from(profile: CompanyProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            address: profile.address,
            email: profile.email,
            url: profile.url,
            phone: profile.phone,
            bank_account_number: profile.bank_account_number,
        }
    }
}

/// GET `/company` - The business profile stored in the books.
async fn get_company(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CompanyRepository::new((*state.db).clone());

    match repo.profile().await {
        Ok(profile) => {
            (StatusCode::OK, Json(json!(CompanyResponse::from(profile)))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to load company profile");
            error_response(&AppError::from(e))
        }
    }
}
