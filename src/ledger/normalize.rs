//! Converts raw store records into signed ledger entries.
//!
//! This is the single source of truth for the signing convention: income
//! amounts come out positive and expense amounts negative. Every other
//! component that needs signed amounts goes through these functions.

use crate::record::{ExpenseRecord, IncomeRecord, amount_or_zero, parse_date};

use super::entry::{EntryKind, LedgerEntry};

/// Normalize an income record into a ledger entry with a positive signed
/// amount.
///
/// Non-numeric or missing amounts degrade to `0.0` and unparsable dates to
/// `None`; both degradations are logged with the record id. The returned
/// entry's `balance` is zero until [crate::build_ledger] fills it in.
pub fn normalize_income(record: &IncomeRecord) -> LedgerEntry {
    LedgerEntry {
        id: record.id.clone(),
        kind: EntryKind::Income,
        date: parse_date(&record.date, &record.id),
        date_text: record.date.clone(),
        signed_amount: amount_or_zero(&record.amount, &record.id),
        balance: 0.0,
        label: record.source.clone(),
        notes: record.notes.clone(),
    }
}

/// Normalize an expense record into a ledger entry with a negative signed
/// amount.
///
/// Same degradation rules as [normalize_income].
pub fn normalize_expense(record: &ExpenseRecord) -> LedgerEntry {
    LedgerEntry {
        id: record.id.clone(),
        kind: EntryKind::Expense,
        date: parse_date(&record.date, &record.id),
        date_text: record.date.clone(),
        signed_amount: -amount_or_zero(&record.amount, &record.id),
        balance: 0.0,
        label: record.category.clone(),
        notes: record.notes.clone(),
    }
}
