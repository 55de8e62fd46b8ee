//! Pure queries over the ledger: filtered views, running totals, and the
//! category breakdown that drives the expense chart.

use std::collections::BTreeMap;

use tally_domain::{CategoryFilter, Ledger, Transaction};

/// Running totals over the whole ledger, independent of any active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Returns the subsequence matching `filter`, order preserved.
    pub fn filtered_view<'a>(
        ledger: &'a Ledger,
        filter: &CategoryFilter,
    ) -> Vec<&'a Transaction> {
        ledger.iter().filter(|txn| filter.matches(txn)).collect()
    }

    /// Sums income and expense amounts over the full collection.
    pub fn totals(ledger: &Ledger) -> Totals {
        let mut totals = Totals::default();
        for txn in ledger.iter() {
            if txn.is_income() {
                totals.income += txn.amount;
            } else {
                totals.expense += txn.amount;
            }
        }
        totals.balance = totals.income - totals.expense;
        totals
    }

    /// Maps category label to summed amount over expense transactions only.
    /// BTreeMap keeps the iteration order deterministic for rendering.
    pub fn expense_by_category(ledger: &Ledger) -> BTreeMap<String, f64> {
        let mut breakdown = BTreeMap::new();
        for txn in ledger.iter().filter(|txn| txn.is_expense()) {
            *breakdown.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        breakdown
    }
}
