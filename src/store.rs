//! The read interface to the external record store.
//!
//! The engine performs no I/O itself: callers fetch a [Snapshot] of both
//! record sets up front and every aggregation is a pure function over that
//! snapshot. The store sits behind an async boundary because the real
//! implementation is a remote fetch; [MemoryStore] backs tests and
//! embedders that already hold the records in memory.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{
    Category, CategorySpending, Error, ExpenseRecord, IncomeRecord, LedgerEntry, MonthlyTotals,
    Summary, build_ledger, category_total, monthly_series, summarize, top_spending_category,
};

/// Read access to the external store's record sets.
///
/// Implementations are expected to be cheap to call repeatedly; the engine
/// never caches results, so invalidation is simply fetching a fresh
/// [Snapshot].
pub trait RecordStore {
    /// List every income record.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreUnavailable] if the records cannot be fetched.
    fn list_income(&self) -> impl Future<Output = Result<Vec<IncomeRecord>, Error>> + Send;

    /// List every expense record.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreUnavailable] if the records cannot be fetched.
    fn list_expenses(&self) -> impl Future<Output = Result<Vec<ExpenseRecord>, Error>> + Send;

    /// List every category.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreUnavailable] if the categories cannot be
    /// fetched.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, Error>> + Send;
}

/// An immutable snapshot of both record sets.
///
/// All aggregations require income and expenses simultaneously, so the
/// snapshot is the unit the views work from. Aggregation methods delegate
/// to the pure module functions and allocate fresh results on every call;
/// there is no hidden state to invalidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The income records at fetch time.
    pub income: Vec<IncomeRecord>,
    /// The expense records at fetch time.
    pub expenses: Vec<ExpenseRecord>,
}

impl Snapshot {
    /// Build a snapshot from record sets that are already in hand.
    pub fn new(income: Vec<IncomeRecord>, expenses: Vec<ExpenseRecord>) -> Self {
        Self { income, expenses }
    }

    /// Fetch both record sets from the store, concurrently.
    ///
    /// The two listings are independent, so they are awaited together;
    /// this is the engine's only suspension point.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreUnavailable] if either listing fails.
    pub async fn fetch(store: &impl RecordStore) -> Result<Self, Error> {
        let (income, expenses) = tokio::try_join!(store.list_income(), store.list_expenses())?;

        Ok(Self { income, expenses })
    }

    /// The merged transaction ledger, newest first. See
    /// [build_ledger].
    pub fn ledger(&self) -> Vec<LedgerEntry> {
        build_ledger(&self.income, &self.expenses)
    }

    /// Income and expense totals with their net balance. See [summarize].
    pub fn summary(&self) -> Summary {
        summarize(&self.income, &self.expenses)
    }

    /// The category with the greatest total spending, if any expenses
    /// exist. See [top_spending_category].
    pub fn top_spending_category(&self) -> Option<CategorySpending> {
        top_spending_category(&self.expenses)
    }

    /// The monthly income-vs-expense series, ascending by month. See
    /// [monthly_series].
    pub fn monthly_series(&self) -> Vec<MonthlyTotals> {
        monthly_series(&self.income, &self.expenses)
    }

    /// The total spent against the exact category name. See
    /// [category_total].
    pub fn category_total(&self, name: &str) -> f64 {
        category_total(name, &self.expenses)
    }
}

/// A `Vec`-backed [RecordStore] for tests and embedders.
///
/// The optional failure message makes every listing fail, for exercising
/// fetch-error paths without a real remote store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    income: Vec<IncomeRecord>,
    expenses: Vec<ExpenseRecord>,
    categories: Vec<Category>,
    failure: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given record sets.
    pub fn with_records(income: Vec<IncomeRecord>, expenses: Vec<ExpenseRecord>) -> Self {
        Self {
            income,
            expenses,
            ..Self::default()
        }
    }

    /// Set the stored categories.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Make every listing fail with [Error::StoreUnavailable].
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<(), Error> {
        match &self.failure {
            Some(message) => Err(Error::StoreUnavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl RecordStore for MemoryStore {
    async fn list_income(&self) -> Result<Vec<IncomeRecord>, Error> {
        self.check_available()?;
        Ok(self.income.clone())
    }

    async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, Error> {
        self.check_available()?;
        Ok(self.expenses.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.check_available()?;
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        record::{ExpenseRecord, IncomeRecord},
    };

    use super::{MemoryStore, RecordStore, Snapshot};

    #[tokio::test]
    async fn fetch_gathers_both_record_sets() {
        let store = MemoryStore::with_records(
            vec![IncomeRecord::new(1, 1000.0, "2024-01-01", "Salary")],
            vec![ExpenseRecord::new(1, 250.0, "2024-01-10", "Food")],
        );

        let snapshot = Snapshot::fetch(&store).await.unwrap();

        assert_eq!(snapshot.income.len(), 1);
        assert_eq!(snapshot.expenses.len(), 1);
    }

    #[tokio::test]
    async fn fetch_propagates_store_failure() {
        let store = MemoryStore::failing("connection refused");

        let result = Snapshot::fetch(&store).await;

        assert_eq!(
            result,
            Err(Error::StoreUnavailable("connection refused".to_owned()))
        );
    }

    #[tokio::test]
    async fn empty_store_lists_are_not_errors() {
        let store = MemoryStore::new();

        let snapshot = Snapshot::fetch(&store).await.unwrap();

        assert!(snapshot.income.is_empty());
        assert!(snapshot.expenses.is_empty());
        assert!(store.list_categories().await.unwrap().is_empty());
    }

    #[test]
    fn snapshot_aggregations_agree_with_module_functions() {
        let snapshot = Snapshot::new(
            vec![IncomeRecord::new(1, 800.0, "2024-01-01", "Salary")],
            vec![ExpenseRecord::new(1, 300.0, "2024-01-05", "Rent")],
        );

        assert_eq!(snapshot.summary().balance, 500.0);
        assert_eq!(snapshot.ledger().len(), 2);
        assert_eq!(snapshot.category_total("Rent"), 300.0);
        assert_eq!(snapshot.monthly_series().len(), 1);
        assert_eq!(snapshot.top_spending_category().unwrap().category, "Rent");
    }
}
