//! Invoice listing and detail routes.

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

use fakt_db::entities::invoices;
use fakt_db::repositories::{
    EntryView, InvoiceListItem, InvoiceRepository, InvoiceView, PostingView,
};
use fakt_shared::error::AppError;
use fakt_shared::types::Guid;

use crate::{AppState, routes::error_response};

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices))
        .route("/invoices/{guid}", get(get_invoice))
}

/// One row of the invoice listing.
#[derive(Debug, Serialize)]
pub struct InvoiceSummary {
    /// Invoice guid.
    pub guid: String,
    /// Human-readable invoice number.
    pub number: String,
    /// When the invoice was opened (RFC 3339, UTC).
    pub date_opened: Option<String>,
    /// When the invoice was posted (RFC 3339, UTC).
    pub date_posted: Option<String>,
    /// Whether the invoice has been posted to the ledger.
    pub posted: bool,
}

impl From<invoices::Model> for InvoiceSummary {
    fn from(invoice: invoices::Model) -> Self {
        Self {
            posted: invoice.is_posted(),
            guid: invoice.guid,
            number: invoice.id,
            date_opened: invoice.date_opened.map(|d| d.and_utc().to_rfc3339()),
            date_posted: invoice.date_posted.map(|d| d.and_utc().to_rfc3339()),
        }
    }
}

/// One row of the main invoice listing, with derived figures.
#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    /// Invoice guid.
    pub guid: String,
    /// Human-readable invoice number.
    pub number: String,
    /// Name of the customer the invoice ultimately bills.
    pub customer: String,
    /// When the invoice was opened (RFC 3339, UTC).
    pub date_opened: Option<String>,
    /// When the invoice was posted (RFC 3339, UTC).
    pub date_posted: Option<String>,
    /// Sum of line grosses as a decimal string.
    pub gross: String,
    /// Outstanding balance as a decimal string.
    pub due: String,
    /// True once posted with a zero balance.
    pub is_paid: bool,
}

impl From<InvoiceListItem> for InvoiceListResponse {
    fn from(item: InvoiceListItem) -> Self {
        Self {
            guid: item.invoice.guid,
            number: item.invoice.id,
            customer: item.customer.name,
            date_opened: item.invoice.date_opened.map(|d| d.and_utc().to_rfc3339()),
            date_posted: item.invoice.date_posted.map(|d| d.and_utc().to_rfc3339()),
            gross: item.gross.to_string(),
            due: item.due.to_string(),
            is_paid: item.is_paid,
        }
    }
}

/// One line of the invoice detail.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    /// Entry guid.
    pub guid: String,
    /// Line description.
    pub description: String,
    /// Action label (e.g. "Hours").
    pub action: Option<String>,
    /// Quantity as a decimal string.
    pub quantity: String,
    /// Unit price as a decimal string.
    pub unit_price: String,
    /// Net amount as a decimal string.
    pub net: String,
    /// Tax rate percentage as a decimal string.
    pub tax_rate: String,
    /// Tax amount as a decimal string.
    pub tax: String,
    /// Gross amount as a decimal string.
    pub gross: String,
}

impl From<EntryView> for EntryResponse {
    fn from(view: EntryView) -> Self {
        Self {
            guid: view.entry.guid,
            description: view.entry.description,
            action: view.entry.action,
            quantity: view.quantity.to_string(),
            unit_price: view.unit_price.to_string(),
            net: view.net.to_string(),
            tax_rate: view.tax_rate.to_string(),
            tax: view.tax.to_string(),
            gross: view.gross.to_string(),
        }
    }
}

/// One ledger posting of the invoice detail.
#[derive(Debug, Serialize)]
pub struct PostingResponse {
    /// Split guid.
    pub guid: String,
    /// Action label (e.g. "Invoice", "Payment").
    pub action: String,
    /// Split value as a decimal string.
    pub amount: String,
    /// When the transaction was posted (RFC 3339, configured zone).
    pub post_date: Option<String>,
}

impl From<PostingView> for PostingResponse {
    fn from(view: PostingView) -> Self {
        Self {
            guid: view.split.guid,
            action: view.split.action,
            amount: view.amount.to_string(),
            post_date: view.post_date.map(|d| d.to_rfc3339()),
        }
    }
}

/// The aggregated invoice detail.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    /// Invoice guid.
    pub guid: String,
    /// Human-readable invoice number.
    pub number: String,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the invoice was opened (RFC 3339, UTC).
    pub date_opened: Option<String>,
    /// When the invoice was posted (RFC 3339, UTC).
    pub date_posted: Option<String>,
    /// The customer the invoice ultimately bills.
    pub customer: CustomerRef,
    /// The job the invoice is billed through, if any.
    pub job: Option<JobRef>,
    /// Lines with derived figures.
    pub entries: Vec<EntryResponse>,
    /// Sum of line nets.
    pub net: String,
    /// Sum of line taxes.
    pub tax: String,
    /// Sum of line grosses.
    pub gross: String,
    /// Outstanding balance.
    pub due: String,
    /// Sum of payments received (non-positive).
    pub paid: String,
    /// True once posted with a zero balance.
    pub is_paid: bool,
    /// Payment deadline (RFC 3339, configured zone).
    pub due_date: Option<String>,
    /// Ledger postings, internal marker splits excluded.
    pub postings: Vec<PostingResponse>,
}

/// Customer reference embedded in the invoice detail.
#[derive(Debug, Serialize)]
pub struct CustomerRef {
    /// Customer guid.
    pub guid: String,
    /// Customer name.
    pub name: String,
    /// Addressee line.
    pub addr_name: Option<String>,
    /// Postal address lines, empty lines dropped.
    pub address: Vec<String>,
}

/// Job reference embedded in the invoice detail.
#[derive(Debug, Serialize)]
pub struct JobRef {
    /// Job guid.
    pub guid: String,
    /// Job name.
    pub name: String,
}

impl From<InvoiceView> for InvoiceResponse {
    fn from(view: InvoiceView) -> Self {
        let address = view
            .customer
            .address_lines()
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();
        Self {
            guid: view.invoice.guid,
            number: view.invoice.id,
            notes: view.invoice.notes,
            date_opened: view.invoice.date_opened.map(|d| d.and_utc().to_rfc3339()),
            date_posted: view.invoice.date_posted.map(|d| d.and_utc().to_rfc3339()),
            customer: CustomerRef {
                guid: view.customer.guid,
                name: view.customer.name,
                addr_name: view.customer.addr_name,
                address,
            },
            job: view.job.map(|job| JobRef {
                guid: job.guid,
                name: job.name,
            }),
            entries: view.entries.into_iter().map(EntryResponse::from).collect(),
            net: view.net.to_string(),
            tax: view.tax.to_string(),
            gross: view.gross.to_string(),
            due: view.due.to_string(),
            paid: view.paid.to_string(),
            is_paid: view.is_paid,
            due_date: view.due_date.map(|d| d.to_rfc3339()),
            postings: view.postings.into_iter().map(PostingResponse::from).collect(),
        }
    }
}

/// GET `/invoices` - List all customer invoices, newest number first.
async fn list_invoices(State(state): State<AppState>) -> impl IntoResponse {
    let repo = InvoiceRepository::new((*state.db).clone(), state.ledger.clone());

    match repo.list_summaries().await {
        Ok(items) => {
            let invoices: Vec<InvoiceListResponse> =
                items.into_iter().map(InvoiceListResponse::from).collect();
            (StatusCode::OK, Json(json!({ "invoices": invoices }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list invoices");
            error_response(&AppError::from(e))
        }
    }
}

/// GET `/invoices/{guid}` - Full invoice detail with derived figures.
async fn get_invoice(State(state): State<AppState>, Path(guid): Path<String>) -> impl IntoResponse {
    let Ok(guid) = Guid::parse(&guid) else {
        return error_response(&AppError::Validation(format!("Invalid guid: {guid}")));
    };

    let repo = InvoiceRepository::new((*state.db).clone(), state.ledger.clone());

    match repo.summarize(&guid).await {
        Ok(view) => (StatusCode::OK, Json(json!(InvoiceResponse::from(view)))).into_response(),
        Err(e) => {
            error!(error = %e, invoice = %guid, "Failed to summarize invoice");
            error_response(&AppError::from(e))
        }
    }
}
