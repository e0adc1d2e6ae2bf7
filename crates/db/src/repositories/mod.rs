//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. All repositories are read-only over the bookkeeping
//! store; only `OptionRepository` writes, and only to the
//! application's own table.

pub mod company;
pub mod customer;
pub mod invoice;
pub mod option;

pub use company::{CompanyError, CompanyProfile, CompanyRepository};
pub use customer::{CustomerError, CustomerRepository};
pub use invoice::{
    EntryView, InvoiceError, InvoiceListItem, InvoiceRepository, InvoiceView, LedgerSettings,
    PostingView,
};
pub use option::{OptionError, OptionRepository};
