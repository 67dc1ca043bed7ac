//! The ledger-ready view of a store record.

use serde::Serialize;
use time::Date;

use crate::record::RecordId;

/// Whether a ledger entry moves money into or out of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money earned; the signed amount is positive.
    Income,
    /// Money spent; the signed amount is negative.
    Expense,
}

/// A normalized, signed view of either an income or expense record.
///
/// Entries are immutable once derived; the ledger is recomputed fresh from
/// the raw record sets on every call to [crate::build_ledger].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    /// The id of the record this entry was derived from.
    pub id: RecordId,
    /// Whether the underlying record is income or an expense.
    pub kind: EntryKind,
    /// The parsed date, or `None` when the stored date string could not be
    /// parsed. Undated entries keep their input-order slot in the ledger.
    pub date: Option<Date>,
    /// The date exactly as stored, for display.
    pub date_text: String,
    /// The amount signed by kind: positive inflow, negative outflow.
    pub signed_amount: f64,
    /// Cumulative sum of signed amounts up to and including this entry, in
    /// chronological order. Zero until the merger fills it in.
    pub balance: f64,
    /// The income source or expense category name.
    pub label: String,
    /// Free-text notes carried over from the record.
    pub notes: Option<String>,
}
