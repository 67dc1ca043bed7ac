//! The unified transaction ledger.
//!
//! Normalizes income and expense records into signed [LedgerEntry] values
//! and merges them into one chronologically ordered sequence with running
//! balances.

mod entry;
mod merge;
mod normalize;

pub use entry::{EntryKind, LedgerEntry};
pub use merge::build_ledger;
pub use normalize::{normalize_expense, normalize_income};
