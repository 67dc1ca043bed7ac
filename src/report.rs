//! Monthly income-vs-expense series for trend reporting.
//!
//! Buckets are keyed by the first day of each record's calendar month, a
//! comparable date value, and only formatted into a human-readable label
//! at presentation time. Sorting formatted labels by re-parsing them as
//! dates is locale- and format-dependent, so it is deliberately avoided.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Month};

use crate::record::{ExpenseRecord, IncomeRecord, RecordId, amount_or_zero, parse_date};

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    /// The first day of the month, acting as the bucket key.
    pub month: Date,
    /// Sum of income amounts dated in this month, unsigned.
    pub income: f64,
    /// Sum of expense amounts dated in this month, unsigned.
    pub expense: f64,
}

impl MonthlyTotals {
    fn new(month: Date) -> Self {
        Self {
            month,
            income: 0.0,
            expense: 0.0,
        }
    }
}

/// Bucket both record sets by calendar month, ascending.
///
/// Every month with at least one contributing income or expense record
/// appears exactly once; months nobody touched do not appear at all.
/// Records whose dates cannot be parsed are excluded from bucketing (and
/// logged), since they cannot be placed in a month reliably.
pub fn monthly_series(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Vec<MonthlyTotals> {
    let mut buckets: HashMap<Date, MonthlyTotals> = HashMap::new();

    for record in income {
        if let Some(month) = record_month(&record.date, &record.id) {
            buckets
                .entry(month)
                .or_insert_with(|| MonthlyTotals::new(month))
                .income += amount_or_zero(&record.amount, &record.id);
        }
    }

    for record in expenses {
        if let Some(month) = record_month(&record.date, &record.id) {
            buckets
                .entry(month)
                .or_insert_with(|| MonthlyTotals::new(month))
                .expense += amount_or_zero(&record.amount, &record.id);
        }
    }

    let mut series: Vec<MonthlyTotals> = buckets.into_values().collect();
    series.sort_by_key(|bucket| bucket.month);
    series
}

/// Format a bucket month as a short human-readable label, e.g. "Jan 2024".
///
/// Presentation only; the series itself stays keyed by date.
pub fn month_label(month: Date) -> String {
    let name = match month.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{name} {}", month.year())
}

fn record_month(date: &str, id: &RecordId) -> Option<Date> {
    parse_date(date, id).map(|date| date.replace_day(1).expect("day 1 is valid in every month"))
}
