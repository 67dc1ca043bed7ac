//! Dashboard summary figures computed from the raw record sets.
//!
//! Totals are summed from the unsigned raw amounts, never derived from the
//! signed ledger, so the summary and the ledger's final balance are two
//! independent derivations that must agree.

use std::collections::{HashMap, hash_map::Entry};

use serde::Serialize;

use crate::record::{ExpenseRecord, IncomeRecord, amount_or_zero};

/// Total income, total expenses, and the resulting net balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of all income amounts, unsigned.
    pub total_income: f64,
    /// Sum of all expense amounts, unsigned.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub balance: f64,
}

/// Compute the dashboard summary from both record sets.
///
/// Empty inputs give an all-zero summary. Records with malformed amounts
/// contribute zero.
pub fn summarize(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Summary {
    let total_income = income
        .iter()
        .map(|record| amount_or_zero(&record.amount, &record.id))
        .sum();
    let total_expenses = expenses
        .iter()
        .map(|record| amount_or_zero(&record.amount, &record.id))
        .sum();

    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// A category name and the total amount spent on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    /// The expense category, exactly as it appears on the records.
    pub category: String,
    /// The summed amount spent on the category.
    pub amount: f64,
}

/// Find the category with the greatest total spending.
///
/// Amounts are grouped by the exact category string on each expense record,
/// with no case normalization. The scan visits categories in first-encounter
/// order and only a strictly greater total displaces the current leader, so
/// an exact tie goes to the category encountered first.
///
/// Returns `None` when there are no expense records at all.
pub fn top_spending_category(expenses: &[ExpenseRecord]) -> Option<CategorySpending> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut encounter_order: Vec<&str> = Vec::new();

    for record in expenses {
        let amount = amount_or_zero(&record.amount, &record.id);
        let category = record.category.as_str();

        match totals.entry(category) {
            Entry::Occupied(mut entry) => *entry.get_mut() += amount,
            Entry::Vacant(entry) => {
                entry.insert(amount);
                encounter_order.push(category);
            }
        }
    }

    let mut top: Option<CategorySpending> = None;
    for category in encounter_order {
        let amount = totals[category];
        if top.as_ref().is_none_or(|leader| amount > leader.amount) {
            top = Some(CategorySpending {
                category: category.to_owned(),
                amount,
            });
        }
    }

    top
}
