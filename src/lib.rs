//! Pocket Ledger is the aggregation engine of a personal finance tracker.
//!
//! It merges a store's income and expense records into a unified,
//! chronologically ordered transaction ledger with running balances, and
//! derives the summary views shown on a dashboard: income and expense
//! totals, the top spending category, per-category totals, and a monthly
//! income-vs-expense trend series.
//!
//! The engine performs no I/O of its own. Callers fetch a [Snapshot] of
//! both record sets from a [RecordStore] and every aggregation is a pure
//! function over that snapshot, so concurrent callers need no locking and
//! repeated calls always produce identical results.

#![warn(missing_docs)]

mod category;
mod ledger;
mod record;
mod report;
mod store;
mod summary;

pub use category::{Category, CategoryName, category_total};
pub use ledger::{EntryKind, LedgerEntry, build_ledger, normalize_expense, normalize_income};
pub use record::{ExpenseRecord, IncomeRecord, RecordId};
pub use report::{MonthlyTotals, month_label, monthly_series};
pub use store::{MemoryStore, RecordStore, Snapshot};
pub use summary::{CategorySpending, Summary, summarize, top_spending_category};

/// The errors that may occur in the ledger engine.
///
/// Data-shape anomalies in individual records (non-numeric amounts,
/// unparsable dates, missing fields) are deliberately *not* errors: the
/// engine degrades those records to safe defaults and logs a warning so a
/// single bad record cannot abort an entire report.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A category with the same name already exists.
    ///
    /// Duplicate checking is case-insensitive and only applies at creation
    /// time; see [CategoryName::ensure_unique].
    #[error("the category \"{0}\" already exists")]
    DuplicateCategoryName(String),

    /// The external store failed to produce the requested records.
    ///
    /// This is the only error the engine escalates: without both record
    /// sets there is nothing to aggregate. The message comes from the
    /// store implementation.
    #[error("could not fetch records from the store: {0}")]
    StoreUnavailable(String),
}
