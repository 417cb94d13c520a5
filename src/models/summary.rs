use std::collections::BTreeMap;

use super::{Category, Transaction};

/// Accumulated signed expenditure per category. Every category is always
/// present as a key (0.0 when unused); only non-positive amounts accrue
/// here, so no value is ever positive.
pub type CategoryTotals = BTreeMap<Category, f64>;

/// The single immutable value produced by one analysis run.
/// `transaction_details` is chronological ascending.
#[derive(Debug, Clone)]
pub struct AnalysisSummary {
    pub initial_balance: f64,
    pub final_balance: f64,
    pub total_income: f64,
    pub total_expenditure: f64,
    pub expenditure_by_category: CategoryTotals,
    pub transaction_details: Vec<Transaction>,
}

impl AnalysisSummary {
    /// Earliest and latest transaction dates, as the raw date strings.
    /// `YYYY-MM-DD` text compares chronologically, so min/max suffice.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        let earliest = self
            .transaction_details
            .iter()
            .map(|t| t.date.as_str())
            .min()?;
        let latest = self
            .transaction_details
            .iter()
            .map(|t| t.date.as_str())
            .max()?;
        Some((earliest, latest))
    }
}
