//! Customer listing and detail routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use fakt_db::entities::customers;
use fakt_db::repositories::CustomerRepository;
use fakt_shared::error::AppError;
use fakt_shared::types::Guid;

use crate::routes::invoices::InvoiceSummary;
use crate::{AppState, routes::error_response};

/// Creates the customer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/{guid}", get(get_customer))
}

/// A customer with their postal address.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    /// Customer guid.
    pub guid: String,
    /// Customer name.
    pub name: String,
    /// Addressee line.
    pub addr_name: Option<String>,
    /// Postal address lines, empty lines dropped.
    pub address: Vec<String>,
}

impl From<customers::Model> for CustomerResponse {
    fn from(customer: customers::Model) -> Self {
        let address = customer
            .address_lines()
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();
        Self {
            guid: customer.guid,
            name: customer.name,
            addr_name: customer.addr_name,
            address,
        }
    }
}

/// A job in the customer detail.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    /// Job guid.
    pub guid: String,
    /// Job name.
    pub name: String,
}

/// GET `/customers` - List all customers by name.
async fn list_customers(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CustomerRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(rows) => {
            let customers: Vec<CustomerResponse> =
                rows.into_iter().map(CustomerResponse::from).collect();
            (StatusCode::OK, Json(json!({ "customers": customers }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list customers");
            error_response(&AppError::from(e))
        }
    }
}

/// GET `/customers/{guid}` - Customer detail with jobs and invoice history.
async fn get_customer(State(state): State<AppState>, Path(guid): Path<String>) -> impl IntoResponse {
    let Ok(guid) = Guid::parse(&guid) else {
        return error_response(&AppError::Validation(format!("Invalid guid: {guid}")));
    };

    let repo = CustomerRepository::new((*state.db).clone());

    let customer = match repo.find(&guid).await {
        Ok(customer) => customer,
        Err(e) => {
            error!(error = %e, customer = %guid, "Failed to find customer");
            return error_response(&AppError::from(e));
        }
    };

    let jobs = match repo.jobs(&guid).await {
        Ok(rows) => rows
            .into_iter()
            .map(|job| JobResponse {
                guid: job.guid,
                name: job.name,
            })
            .collect::<Vec<_>>(),
        Err(e) => {
            error!(error = %e, customer = %guid, "Failed to list customer jobs");
            return error_response(&AppError::from(e));
        }
    };

    let invoices = match repo.invoices(&guid).await {
        Ok(rows) => rows
            .into_iter()
            .map(InvoiceSummary::from)
            .collect::<Vec<_>>(),
        Err(e) => {
            error!(error = %e, customer = %guid, "Failed to list customer invoices");
            return error_response(&AppError::from(e));
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "customer": CustomerResponse::from(customer),
            "jobs": jobs,
            "invoices": invoices,
        })),
    )
        .into_response()
}
