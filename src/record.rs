//! Raw income and expense records as read from the external store.
//!
//! The store is a JSON document store, so fields arrive loosely typed:
//! identifiers may be integers or strings, amounts may be numbers or
//! numeric strings, and dates are ISO 8601 strings that may not parse.
//! This module defines the record shapes and the lossy parsing helpers the
//! aggregators share, so every view applies the same fallbacks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The store-assigned identifier of a record.
///
/// The store is free to hand out integer or string identifiers, so this
/// deserializes from either representation. Identifiers are opaque to the
/// engine and only used for display and log messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// A numeric identifier, e.g. from an auto-incrementing store.
    Integer(i64),
    /// A text identifier, e.g. a UUID or nanoid.
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// An income record: money earned from some source.
///
/// All fields default when absent so a sparse store payload deserializes
/// rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// The store-assigned identifier.
    #[serde(default)]
    pub id: RecordId,
    /// The unsigned amount earned. A number or numeric string; anything
    /// else is treated as zero during aggregation.
    #[serde(default)]
    pub amount: Value,
    /// The date the income was received, as an ISO 8601 date string.
    #[serde(default)]
    pub date: String,
    /// A free-text label for where the money came from.
    #[serde(default)]
    pub source: String,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl IncomeRecord {
    /// Create an income record with a numeric id and amount.
    pub fn new(id: i64, amount: f64, date: &str, source: &str) -> Self {
        Self {
            id: RecordId::Integer(id),
            amount: Value::from(amount),
            date: date.to_owned(),
            source: source.to_owned(),
            notes: None,
        }
    }
}

/// An expense record: money spent against a category.
///
/// The `category` field references a [crate::Category] by name only; the
/// engine never validates the reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// The store-assigned identifier.
    #[serde(default)]
    pub id: RecordId,
    /// The unsigned amount spent. A number or numeric string; anything
    /// else is treated as zero during aggregation.
    #[serde(default)]
    pub amount: Value,
    /// The date the expense occurred, as an ISO 8601 date string.
    #[serde(default)]
    pub date: String,
    /// The name of the category this expense belongs to.
    #[serde(default)]
    pub category: String,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExpenseRecord {
    /// Create an expense record with a numeric id and amount.
    pub fn new(id: i64, amount: f64, date: &str, category: &str) -> Self {
        Self {
            id: RecordId::Integer(id),
            amount: Value::from(amount),
            date: date.to_owned(),
            category: category.to_owned(),
            notes: None,
        }
    }
}

/// Parse a record's loosely typed amount field.
///
/// Returns `None` when the value is missing or not a number, leaving the
/// fallback policy to the caller.
pub(crate) fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// The parsed amount of a record, with the documented zero fallback.
///
/// Non-numeric or missing amounts degrade to `0.0` with a warning rather
/// than failing the aggregation for every other record.
pub(crate) fn amount_or_zero(value: &Value, id: &RecordId) -> f64 {
    match parse_amount(value) {
        Some(amount) => amount,
        None => {
            tracing::warn!("record {id} has non-numeric amount {value}, defaulting to 0");
            0.0
        }
    }
}

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a record's ISO 8601 date string.
///
/// Returns `None` for anything that is not a valid `YYYY-MM-DD` date. The
/// caller decides what an undated record means: the ledger keeps it in
/// input order, the monthly series excludes it.
pub(crate) fn parse_date(text: &str, id: &RecordId) -> Option<Date> {
    match Date::parse(text.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!("record {id} has unparsable date {text:?}");
            None
        }
    }
}
