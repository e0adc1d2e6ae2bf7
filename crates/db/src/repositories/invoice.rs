//! Invoice repository: listings, lookups and the aggregation engine.
//!
//! The store holds only raw facts (entries as quantity/price rationals,
//! lot splits, term references). Everything an invoice page shows is
//! derived here on read, by feeding those facts through the pure logic
//! in `fakt_core`. Nothing derived is ever written back.

use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use fakt_core::invoice::{
    self as invoice_logic, InvoiceTotals, LineAmounts, line_amounts, resolve_tax_rate,
    sort_by_number_desc,
};
use fakt_core::owner::{OwnerError, OwnerType};
use fakt_core::schedule::{self, ScheduleError};
use fakt_core::settlement;
use fakt_shared::config::LedgerConfig;
use fakt_shared::error::AppError;
use fakt_shared::types::{Fraction, FractionError, Guid};

use crate::entities::{billterms, customers, entries, invoices, jobs, splits, taxtable_entries, transactions};

/// Job ownership chains are Job -> Job -> Customer at most; a longer
/// chain means the store is corrupt.
const MAX_OWNER_DEPTH: u32 = 3;

/// Error types for invoice operations.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    NotFound(String),

    /// The owner chain ended at a customer guid with no row.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// The invoice's owner is a job guid with no row.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// The invoice references a payment term with no row.
    #[error("Payment term not found: {0}")]
    TermNotFound(String),

    /// The invoice carries no payment term, so no due date exists.
    #[error("Invoice {0} has no payment term")]
    NoTerms(String),

    /// The invoice is not posted, so no due date exists.
    #[error("Invoice {0} is not posted")]
    NotPosted(String),

    /// A lot split references a transaction with no row.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// A taxable entry whose tax-table reference resolves to no rate.
    #[error("Taxable entry {0} has no tax rate")]
    MissingTaxRate(String),

    /// An owner-type discriminator outside the supported set.
    #[error("Invalid owner type: {0}")]
    InvalidOwnerType(i32),

    /// The job ownership chain exceeds the supported depth.
    #[error("Owner chain too deep for invoice {0}")]
    OwnerChainTooDeep(String),

    /// A stored rational is malformed or out of range.
    #[error("Amount error: {0}")]
    Amount(#[from] FractionError),

    /// Due-date arithmetic failed.
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<OwnerError> for InvoiceError {
    fn from(err: OwnerError) -> Self {
        match err {
            OwnerError::InvalidOwnerType(code) => Self::InvalidOwnerType(code),
        }
    }
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::NotFound(_)
            | InvoiceError::CustomerNotFound(_)
            | InvoiceError::JobNotFound(_)
            | InvoiceError::TermNotFound(_)
            | InvoiceError::TransactionNotFound(_) => Self::NotFound(err.to_string()),
            InvoiceError::NotPosted(invoice) => Self::NotPosted(invoice),
            InvoiceError::NoTerms(_) => Self::Validation(err.to_string()),
            InvoiceError::MissingTaxRate(entry) => Self::MissingTaxRate(entry),
            InvoiceError::InvalidOwnerType(code) => Self::InvalidOwnerType(code),
            InvoiceError::OwnerChainTooDeep(_)
            | InvoiceError::Amount(_)
            | InvoiceError::Schedule(_) => Self::Internal(err.to_string()),
            InvoiceError::Database(db_err) => Self::Database(db_err.to_string()),
        }
    }
}

/// Resolved ledger interpretation settings.
///
/// The parsed form of [`LedgerConfig`]: the zone string becomes a
/// [`Tz`] once, at startup, so request paths never re-parse it.
#[derive(Debug, Clone)]
pub struct LedgerSettings {
    /// Time zone for due-date arithmetic.
    pub timezone: Tz,
    /// Action label marking internal bookkeeping splits.
    pub internal_action: String,
}

impl LedgerSettings {
    /// Parses the configured settings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the time zone is not a known
    /// IANA name.
    pub fn from_config(config: &LedgerConfig) -> Result<Self, AppError> {
        let timezone = config
            .timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Validation(format!("Unknown time zone: {}", config.timezone)))?;
        Ok(Self {
            timezone,
            internal_action: config.internal_action.clone(),
        })
    }
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
            internal_action: "Auto Split".to_string(),
        }
    }
}

/// One listing row with its derived figures.
#[derive(Debug, Clone)]
pub struct InvoiceListItem {
    /// Invoice header.
    pub invoice: invoices::Model,
    /// The customer the invoice ultimately bills.
    pub customer: customers::Model,
    /// Sum of line grosses.
    pub gross: Decimal,
    /// Outstanding balance from the ledger lot.
    pub due: Decimal,
    /// True once posted with a zero balance.
    pub is_paid: bool,
}

/// One invoice line with its derived figures, ready for presentation.
#[derive(Debug, Clone)]
pub struct EntryView {
    /// The stored line.
    pub entry: entries::Model,
    /// Quantity as a decimal.
    pub quantity: Decimal,
    /// Unit price as a decimal.
    pub unit_price: Decimal,
    /// Unit price times quantity.
    pub net: Decimal,
    /// Applied tax rate, as a percentage.
    pub tax_rate: Decimal,
    /// Tax amount.
    pub tax: Decimal,
    /// Net plus tax.
    pub gross: Decimal,
}

/// One ledger posting against the invoice's lot.
#[derive(Debug, Clone)]
pub struct PostingView {
    /// The stored split.
    pub split: splits::Model,
    /// Split value; positive is a charge, non-positive a payment.
    pub amount: Decimal,
    /// When the owning transaction was posted, in the configured zone.
    pub post_date: Option<DateTime<Tz>>,
}

/// A fully aggregated invoice.
#[derive(Debug, Clone)]
pub struct InvoiceView {
    /// Invoice header.
    pub invoice: invoices::Model,
    /// The customer the invoice ultimately bills.
    pub customer: customers::Model,
    /// The job the invoice is billed through, if any.
    pub job: Option<jobs::Model>,
    /// Lines with derived figures.
    pub entries: Vec<EntryView>,
    /// Sum of line nets.
    pub net: Decimal,
    /// Sum of line taxes.
    pub tax: Decimal,
    /// Sum of line grosses.
    pub gross: Decimal,
    /// Outstanding balance from the ledger lot.
    pub due: Decimal,
    /// Sum of payments received (non-positive).
    pub paid: Decimal,
    /// True once posted with a zero balance.
    pub is_paid: bool,
    /// Payment deadline; present only for posted invoices with a term.
    pub due_date: Option<DateTime<Tz>>,
    /// Ledger postings, internal marker splits excluded.
    pub postings: Vec<PostingView>,
}

/// Invoice repository deriving financial state on read.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
    settings: LedgerSettings,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, settings: LedgerSettings) -> Self {
        Self { db, settings }
    }

    /// Finds an invoice by guid.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::NotFound` if no row matches.
    pub async fn find(&self, guid: &Guid) -> Result<invoices::Model, InvoiceError> {
        invoices::Entity::find_by_id(guid.as_str())
            .one(&self.db)
            .await?
            .ok_or_else(|| InvoiceError::NotFound(guid.to_string()))
    }

    /// Lists all customer invoices, newest number first.
    ///
    /// Bills and vendor documents share the invoices table; only rows
    /// owned by a customer or a job are listed. Sorting happens
    /// in-process so a backend's collation cannot change the order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<invoices::Model>, InvoiceError> {
        let mut rows = invoices::Entity::find()
            .filter(invoices::Column::OwnerType.is_in([
                OwnerType::Customer.code(),
                OwnerType::Job.code(),
            ]))
            .all(&self.db)
            .await?;
        sort_by_number_desc(&mut rows, |row: &invoices::Model| row.id.as_str());
        Ok(rows)
    }

    /// Lists every invoice with the figures the listing shows.
    ///
    /// Derived values are recomputed on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if a row's figures cannot be derived.
    pub async fn list_summaries(&self) -> Result<Vec<InvoiceListItem>, InvoiceError> {
        let mut items = Vec::new();
        for invoice in self.list().await? {
            let customer = self.resolve_customer(&invoice).await?;
            let mut totals = InvoiceTotals::default();
            for entry in self.entries_of(&invoice.guid).await? {
                totals.add_line(&self.entry_amounts(&entry).await?);
            }
            let due = self.balance_due(&invoice).await?;
            let is_paid = settlement::is_settled(invoice.is_posted(), &due);
            items.push(InvoiceListItem {
                customer,
                gross: totals.gross.to_decimal()?,
                due: due.to_decimal()?,
                is_paid,
                invoice,
            });
        }
        Ok(items)
    }

    /// Lists the lines of an invoice in stable (guid) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn entries(&self, guid: &Guid) -> Result<Vec<entries::Model>, InvoiceError> {
        self.entries_of(guid.as_str()).await
    }

    async fn entries_of(&self, invoice_guid: &str) -> Result<Vec<entries::Model>, InvoiceError> {
        let rows = entries::Entity::find()
            .filter(entries::Column::Invoice.eq(invoice_guid))
            .order_by_asc(entries::Column::Guid)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Derives net, tax and gross for one stored line.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::MissingTaxRate` when the line is taxable
    /// but its tax-table reference resolves to no rate row.
    pub async fn entry_amounts(&self, entry: &entries::Model) -> Result<LineAmounts, InvoiceError> {
        let quantity = Fraction::new(entry.quantity_num, entry.quantity_denom)?;
        let unit_price = Fraction::new(entry.i_price_num, entry.i_price_denom)?;

        let table_rate = match &entry.i_taxtable {
            Some(taxtable) => self.tax_rate(taxtable).await?,
            None => None,
        };
        let tax_rate = resolve_tax_rate(entry.taxable(), table_rate).map_err(|err| match err {
            invoice_logic::InvoiceError::MissingTaxRate => {
                InvoiceError::MissingTaxRate(entry.guid.clone())
            }
        })?;

        Ok(line_amounts(quantity, unit_price, tax_rate))
    }

    /// Looks up the first rate row of a tax table.
    ///
    /// Tax tables hold one row per jurisdiction; this application
    /// supports single-rate tables and takes the lowest-id row.
    async fn tax_rate(&self, taxtable: &str) -> Result<Option<Fraction>, InvoiceError> {
        let row = taxtable_entries::Entity::find()
            .filter(taxtable_entries::Column::Taxtable.eq(taxtable))
            .order_by_asc(taxtable_entries::Column::Id)
            .one(&self.db)
            .await?;
        match row {
            Some(row) => Ok(Some(Fraction::new(row.amount_num, row.amount_denom)?)),
            None => Ok(None),
        }
    }

    /// Sums the invoice's line figures.
    ///
    /// # Errors
    ///
    /// Returns an error if a line's amounts cannot be derived.
    pub async fn totals(&self, guid: &Guid) -> Result<InvoiceTotals, InvoiceError> {
        let mut totals = InvoiceTotals::default();
        for entry in self.entries(guid).await? {
            totals.add_line(&self.entry_amounts(&entry).await?);
        }
        Ok(totals)
    }

    /// Fetches every split in the invoice's ledger lot.
    ///
    /// Unposted invoices have no lot and yield an empty list.
    async fn lot_splits(&self, invoice: &invoices::Model) -> Result<Vec<splits::Model>, InvoiceError> {
        let Some(lot) = &invoice.post_lot else {
            return Ok(Vec::new());
        };
        let rows = splits::Entity::find()
            .filter(splits::Column::LotGuid.eq(lot.as_str()))
            .order_by_asc(splits::Column::Guid)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Lists the invoice's ledger postings.
    ///
    /// Internal balancing splits (the configured marker action) are
    /// bookkeeping noise, not payment history, and are filtered out.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn postings(&self, invoice: &invoices::Model) -> Result<Vec<splits::Model>, InvoiceError> {
        let rows = self
            .lot_splits(invoice)
            .await?
            .into_iter()
            .filter(|split| !settlement::is_internal(&split.action, &self.settings.internal_action))
            .collect();
        Ok(rows)
    }

    /// Lists the payment and credit splits against the invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if a split value is malformed.
    pub async fn payments(&self, invoice: &invoices::Model) -> Result<Vec<splits::Model>, InvoiceError> {
        let mut rows = Vec::new();
        for split in self.postings(invoice).await? {
            let value = Fraction::new(split.value_num, split.value_denom)?;
            if settlement::is_payment(&value) {
                rows.push(split);
            }
        }
        Ok(rows)
    }

    /// Computes the outstanding balance.
    ///
    /// The exact sum over the invoice's postings: the charge is
    /// positive, payments and credits non-positive. Zero when unposted
    /// or fully settled.
    ///
    /// # Errors
    ///
    /// Returns an error if a split value is malformed.
    pub async fn balance_due(&self, invoice: &invoices::Model) -> Result<Fraction, InvoiceError> {
        let values = self
            .postings(invoice)
            .await?
            .iter()
            .map(|split| Fraction::new(split.value_num, split.value_denom))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(settlement::balance_due(values))
    }

    /// Sums the payments received against the invoice (non-positive).
    ///
    /// # Errors
    ///
    /// Returns an error if a split value is malformed.
    pub async fn amount_paid(&self, invoice: &invoices::Model) -> Result<Fraction, InvoiceError> {
        let values = self
            .postings(invoice)
            .await?
            .iter()
            .map(|split| Fraction::new(split.value_num, split.value_denom))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(settlement::amount_paid(values))
    }

    /// Derives the paid status: posted with a zero lot balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the lot cannot be read.
    pub async fn is_paid(&self, invoice: &invoices::Model) -> Result<bool, InvoiceError> {
        let due = self.balance_due(invoice).await?;
        Ok(settlement::is_settled(invoice.is_posted(), &due))
    }

    /// Computes the payment deadline in the configured zone.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::NotPosted` for unposted invoices,
    /// `InvoiceError::NoTerms` when the invoice carries no term, and
    /// `InvoiceError::TermNotFound` for a dangling term reference.
    pub async fn due_date(&self, invoice: &invoices::Model) -> Result<DateTime<Tz>, InvoiceError> {
        let Some(posted) = invoice.date_posted else {
            return Err(InvoiceError::NotPosted(invoice.guid.clone()));
        };
        let Some(terms) = &invoice.terms else {
            return Err(InvoiceError::NoTerms(invoice.guid.clone()));
        };
        let term = billterms::Entity::find_by_id(terms.as_str())
            .one(&self.db)
            .await?
            .ok_or_else(|| InvoiceError::TermNotFound(terms.clone()))?;
        Ok(schedule::due_date(posted, term.duedays, self.settings.timezone)?)
    }

    /// Resolves the customer the invoice ultimately bills.
    ///
    /// Job-owned invoices follow the job's own owner reference, which
    /// may be another job, until a customer is reached. The chain is
    /// bounded; anything deeper indicates a corrupt store.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::InvalidOwnerType` for an unsupported
    /// discriminator and `InvoiceError::OwnerChainTooDeep` when the
    /// chain does not terminate within the bound.
    pub async fn resolve_customer(
        &self,
        invoice: &invoices::Model,
    ) -> Result<customers::Model, InvoiceError> {
        let mut owner_type = OwnerType::try_from(invoice.owner_type)?;
        let mut owner_guid = invoice.owner_guid.clone();

        for _ in 0..MAX_OWNER_DEPTH {
            match owner_type {
                OwnerType::Customer => {
                    return customers::Entity::find_by_id(owner_guid.as_str())
                        .one(&self.db)
                        .await?
                        .ok_or(InvoiceError::CustomerNotFound(owner_guid));
                }
                OwnerType::Job => {
                    let job = jobs::Entity::find_by_id(owner_guid.as_str())
                        .one(&self.db)
                        .await?
                        .ok_or(InvoiceError::JobNotFound(owner_guid))?;
                    owner_type = OwnerType::try_from(job.owner_type)?;
                    owner_guid = job.owner_guid;
                }
            }
        }
        Err(InvoiceError::OwnerChainTooDeep(invoice.guid.clone()))
    }

    /// Fetches the job the invoice is billed through, if any.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError::JobNotFound` for a dangling job
    /// reference.
    pub async fn job(&self, invoice: &invoices::Model) -> Result<Option<jobs::Model>, InvoiceError> {
        if OwnerType::try_from(invoice.owner_type)? != OwnerType::Job {
            return Ok(None);
        }
        let job = jobs::Entity::find_by_id(invoice.owner_guid.as_str())
            .one(&self.db)
            .await?
            .ok_or_else(|| InvoiceError::JobNotFound(invoice.owner_guid.clone()))?;
        Ok(Some(job))
    }

    /// Aggregates everything the invoice page shows into one view.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice does not exist or any derived
    /// figure cannot be computed.
    pub async fn summarize(&self, guid: &Guid) -> Result<InvoiceView, InvoiceError> {
        let invoice = self.find(guid).await?;
        let customer = self.resolve_customer(&invoice).await?;
        let job = self.job(&invoice).await?;

        let mut totals = InvoiceTotals::default();
        let mut entry_views = Vec::new();
        for entry in self.entries(guid).await? {
            let amounts = self.entry_amounts(&entry).await?;
            totals.add_line(&amounts);
            let quantity = Fraction::new(entry.quantity_num, entry.quantity_denom)?;
            let unit_price = Fraction::new(entry.i_price_num, entry.i_price_denom)?;
            entry_views.push(EntryView {
                entry,
                quantity: quantity.to_decimal()?,
                unit_price: unit_price.to_decimal()?,
                net: amounts.net.to_decimal()?,
                tax_rate: amounts.tax_rate.to_decimal()?,
                tax: amounts.tax.to_decimal()?,
                gross: amounts.gross.to_decimal()?,
            });
        }

        let due = self.balance_due(&invoice).await?;
        let paid = self.amount_paid(&invoice).await?;
        let is_paid = settlement::is_settled(invoice.is_posted(), &due);

        let due_date = if invoice.is_posted() && invoice.terms.is_some() {
            Some(self.due_date(&invoice).await?)
        } else {
            None
        };

        let mut postings = Vec::new();
        for split in self.postings(&invoice).await? {
            let amount = Fraction::new(split.value_num, split.value_denom)?.to_decimal()?;
            let transaction = transactions::Entity::find_by_id(split.tx_guid.as_str())
                .one(&self.db)
                .await?
                .ok_or_else(|| InvoiceError::TransactionNotFound(split.tx_guid.clone()))?;
            let post_date = transaction
                .post_date
                .map(|date| date.and_utc().with_timezone(&self.settings.timezone));
            postings.push(PostingView {
                split,
                amount,
                post_date,
            });
        }

        Ok(InvoiceView {
            invoice,
            customer,
            job,
            net: totals.net.to_decimal()?,
            tax: totals.tax.to_decimal()?,
            gross: totals.gross.to_decimal()?,
            due: due.to_decimal()?,
            paid: paid.to_decimal()?,
            is_paid,
            due_date,
            entries: entry_views,
            postings,
        })
    }
}
