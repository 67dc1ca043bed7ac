//! Category domain types and per-category expense totals.
//!
//! Categories are created through the external store; the engine only
//! validates names at creation time (sentence casing, case-insensitive
//! uniqueness) and totals expenses against whatever name string each
//! record carries.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    record::{ExpenseRecord, RecordId, amount_or_zero},
};

/// A spending category as stored by the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The store-assigned identifier.
    pub id: RecordId,
    /// The category's display name, sentence-cased at creation.
    pub name: String,
}

/// A validated, sentence-cased category name.
///
/// Names are trimmed and normalized to sentence case (first letter
/// uppercase, the rest lowercase) once, at creation. The stored name is
/// never re-normalized afterwards, which is why all later matching is an
/// exact string comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from user input.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryName] if `name` is empty or whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(to_sentence_case(trimmed)))
        }
    }

    /// Check that no existing category already uses this name, ignoring
    /// case.
    ///
    /// This check only applies at creation time; renames and stale expense
    /// references are not re-validated.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateCategoryName] on a case-insensitive match.
    pub fn ensure_unique(&self, existing: &[Category]) -> Result<(), Error> {
        let lowered = self.0.to_lowercase();

        if existing
            .iter()
            .any(|category| category.name.to_lowercase() == lowered)
        {
            Err(Error::DuplicateCategoryName(self.0.clone()))
        } else {
            Ok(())
        }
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn to_sentence_case(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Sum the amounts of every expense whose category exactly equals `name`.
///
/// Matching is case-sensitive string equality: category names are only
/// normalized at creation, so a category renamed after expenses referenced
/// it silently stops matching and the total drops to zero. Names that never
/// appear on any record simply total `0.0`; that is not an error.
pub fn category_total(name: &str, expenses: &[ExpenseRecord]) -> f64 {
    expenses
        .iter()
        .filter(|record| record.category == name)
        .map(|record| amount_or_zero(&record.amount, &record.id))
        .sum()
}
