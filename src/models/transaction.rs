use serde::{Deserialize, Serialize};

use super::Category;

/// One transaction exactly as the extraction collaborator reported it.
/// `kind` is the collaborator's free-text type hint ("debit", "credit",
/// sometimes a category-like word); it is advisory only. `balance` is a
/// running balance some statements print next to each line; accepted and
/// ignored downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// Canonical transaction: same date/description/amount as the raw record,
/// category assigned by the classifier. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}
