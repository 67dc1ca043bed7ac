//! Merges income and expense records into one running-balance ledger.

use crate::record::{ExpenseRecord, IncomeRecord};

use super::{
    entry::LedgerEntry,
    normalize::{normalize_expense, normalize_income},
};

/// Build the unified transaction ledger from both record sets.
///
/// Income and expense records are normalized ([normalize_income],
/// [normalize_expense]), concatenated with income first, and stably sorted
/// ascending by date, so equal dates keep their concatenation order.
/// Entries whose dates failed to parse are pinned to their input-order
/// position instead of being sorted.
///
/// The running balance is accumulated over the ascending walk, starting
/// from zero, and then the sequence is reversed so the returned order is
/// newest-first for display. Balances keep the values computed in
/// ascending order; they are not recomputed after the reversal.
///
/// The output always contains one entry per input record, and the final
/// chronological balance (the first element of the returned ledger) equals
/// total income minus total expenses.
pub fn build_ledger(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Vec<LedgerEntry> {
    let entries = income
        .iter()
        .map(normalize_income)
        .chain(expenses.iter().map(normalize_expense))
        .collect();

    let mut entries = sort_chronologically(entries);

    let mut balance = 0.0;
    for entry in &mut entries {
        balance += entry.signed_amount;
        entry.balance = balance;
    }

    entries.reverse();
    entries
}

/// Stable ascending sort by date that leaves undated entries in place.
///
/// An entry without a parsable date cannot be reliably compared, so it
/// keeps the position it held in the input sequence while the dated
/// entries sort around it.
fn sort_chronologically(entries: Vec<LedgerEntry>) -> Vec<LedgerEntry> {
    let total = entries.len();
    let mut dated = Vec::with_capacity(total);
    let mut pinned = Vec::new();

    for (position, entry) in entries.into_iter().enumerate() {
        if entry.date.is_some() {
            dated.push(entry);
        } else {
            pinned.push((position, entry));
        }
    }

    dated.sort_by_key(|entry| entry.date);

    let mut merged = Vec::with_capacity(total);
    let mut dated = dated.into_iter();
    let mut pinned = pinned.into_iter().peekable();

    for position in 0..total {
        let next = match pinned.peek() {
            Some((pin, _)) if *pin == position => {
                pinned.next().expect("peek returned an entry").1
            }
            _ => dated.next().expect("every position holds an entry"),
        };
        merged.push(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::record::{ExpenseRecord, IncomeRecord};

    use super::{super::entry::EntryKind, build_ledger};

    #[test]
    fn ledger_is_newest_first_with_ascending_balances() {
        let income = vec![
            IncomeRecord::new(1, 1000.0, "2024-01-10", "Salary"),
            IncomeRecord::new(2, 200.0, "2024-03-05", "Freelance"),
        ];
        let expenses = vec![
            ExpenseRecord::new(1, 300.0, "2024-02-14", "Food"),
            ExpenseRecord::new(2, 150.0, "2024-01-20", "Transport"),
        ];

        let ledger = build_ledger(&income, &expenses);

        assert_eq!(ledger.len(), 4);
        // Newest first: Mar 5, Feb 14, Jan 20, Jan 10.
        assert_eq!(ledger[0].date, Some(date!(2024 - 03 - 05)));
        assert_eq!(ledger[3].date, Some(date!(2024 - 01 - 10)));
        // Balances were computed oldest to newest: 1000, 850, 550, 750.
        assert_eq!(ledger[3].balance, 1000.0);
        assert_eq!(ledger[2].balance, 850.0);
        assert_eq!(ledger[1].balance, 550.0);
        assert_eq!(ledger[0].balance, 750.0);
    }

    #[test]
    fn final_chronological_balance_is_income_minus_expenses() {
        let income = vec![
            IncomeRecord::new(1, 500.0, "2024-01-01", "Salary"),
            IncomeRecord::new(2, 250.0, "2024-01-15", "Gift"),
        ];
        let expenses = vec![
            ExpenseRecord::new(1, 100.0, "2024-01-10", "Food"),
            ExpenseRecord::new(2, 80.0, "2024-01-20", "Transport"),
        ];

        let ledger = build_ledger(&income, &expenses);

        assert_eq!(ledger[0].balance, 570.0); // 750 - 180
    }

    #[test]
    fn first_chronological_balance_equals_its_own_signed_amount() {
        let income = vec![IncomeRecord::new(1, 400.0, "2024-02-01", "Salary")];
        let expenses = vec![ExpenseRecord::new(1, 90.0, "2024-01-05", "Food")];

        let ledger = build_ledger(&income, &expenses);

        let oldest = ledger.last().unwrap();
        assert_eq!(oldest.signed_amount, -90.0);
        assert_eq!(oldest.balance, -90.0);
    }

    #[test]
    fn equal_dates_keep_income_before_expense() {
        let date = "2024-01-15";
        let income = vec![IncomeRecord::new(1, 100.0, date, "Salary")];
        let expenses = vec![ExpenseRecord::new(1, 40.0, date, "Food")];

        let ledger = build_ledger(&income, &expenses);

        // Chronologically the income was concatenated first, so it carries
        // the earlier balance; the display order is reversed.
        assert_eq!(ledger[1].kind, EntryKind::Income);
        assert_eq!(ledger[1].balance, 100.0);
        assert_eq!(ledger[0].kind, EntryKind::Expense);
        assert_eq!(ledger[0].balance, 60.0);
    }

    #[test]
    fn undated_entries_keep_their_input_position() {
        let income = vec![
            IncomeRecord::new(1, 10.0, "2024-03-01", "Salary"),
            IncomeRecord::new(2, 20.0, "when I remember", "IOU"),
            IncomeRecord::new(3, 30.0, "2024-01-01", "Bonus"),
        ];

        let ledger = build_ledger(&income, &[]);

        // Ascending order: the dated entries sort (Jan, Mar) around the
        // undated entry pinned at index 1.
        assert_eq!(ledger[2].date, Some(date!(2024 - 01 - 01)));
        assert_eq!(ledger[1].date, None);
        assert_eq!(ledger[0].date, Some(date!(2024 - 03 - 01)));
        // Balance still accumulates across every entry.
        assert_eq!(ledger[2].balance, 30.0);
        assert_eq!(ledger[1].balance, 50.0);
        assert_eq!(ledger[0].balance, 60.0);
    }

    #[test]
    fn reversed_ledger_has_non_decreasing_dates() {
        let income = vec![
            IncomeRecord::new(1, 1.0, "2024-05-01", "A"),
            IncomeRecord::new(2, 1.0, "2023-12-31", "B"),
        ];
        let expenses = vec![
            ExpenseRecord::new(1, 1.0, "2024-02-29", "C"),
            ExpenseRecord::new(2, 1.0, "2024-02-29", "D"),
            ExpenseRecord::new(3, 1.0, "2024-01-15", "E"),
        ];

        let mut ledger = build_ledger(&income, &expenses);
        ledger.reverse();

        let dates: Vec<_> = ledger.iter().filter_map(|entry| entry.date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn length_is_preserved() {
        let income: Vec<_> = (0..7)
            .map(|i| IncomeRecord::new(i, 1.0, "2024-01-01", "Salary"))
            .collect();
        let expenses: Vec<_> = (0..5)
            .map(|i| ExpenseRecord::new(i, 1.0, "garbage date", "Food"))
            .collect();

        let ledger = build_ledger(&income, &expenses);

        assert_eq!(ledger.len(), 12);
    }

    #[test]
    fn empty_inputs_give_an_empty_ledger() {
        assert!(build_ledger(&[], &[]).is_empty());
    }

    #[test]
    fn ledger_is_idempotent() {
        let income = vec![IncomeRecord::new(1, 75.0, "2024-01-01", "Salary")];
        let expenses = vec![ExpenseRecord::new(1, 25.0, "2024-01-02", "Food")];

        let first = build_ledger(&income, &expenses);
        let second = build_ledger(&income, &expenses);

        assert_eq!(first, second);
    }
}
