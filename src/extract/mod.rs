mod validate;

pub(crate) use validate::validate_page_data;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::PathBuf;

use crate::analysis;
use crate::categorize::Classifier;
use crate::models::{AnalysisSummary, RawTransaction};

/// Boundary to the external vision-extraction collaborator: something that
/// yields one untyped JSON payload per rasterized statement page. The
/// LLM-backed source lives outside this crate; files of already extracted
/// pages are the source shipped here.
pub(crate) trait PageSource {
    fn pages(&mut self) -> Result<Vec<Value>>;
}

/// Page payloads read from a JSON file: either an array of page objects or
/// a single page object.
pub(crate) struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for JsonFileSource {
    fn pages(&mut self) -> Result<Vec<Value>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("{} is not valid JSON", self.path.display()))?;
        match value {
            Value::Array(pages) => Ok(pages),
            page @ Value::Object(_) => Ok(vec![page]),
            _ => bail!(
                "{}: expected a page object or an array of page objects",
                self.path.display()
            ),
        }
    }
}

/// Validated content of a whole statement: the initial balance reported by
/// the first valid page (later pages' balances are ignored) and the raw
/// transactions of every valid page, concatenated in page order.
#[derive(Debug, Clone)]
pub(crate) struct StatementData {
    pub(crate) initial_balance: Option<f64>,
    pub(crate) transactions: Vec<RawTransaction>,
}

/// Shape-guard every page and concatenate the survivors. A malformed page
/// is skipped with a stderr diagnostic and processing continues; the batch
/// fails only when no page yields a transaction.
pub(crate) fn collect_pages(pages: &[Value]) -> Result<StatementData> {
    let mut transactions: Vec<RawTransaction> = Vec::new();
    let mut initial_balance: Option<f64> = None;
    let mut first_valid = true;

    for (i, page) in pages.iter().enumerate() {
        match validate_page_data(page) {
            Ok(data) => {
                if first_valid {
                    initial_balance = data.initial_balance;
                    first_valid = false;
                }
                transactions.extend(data.transactions);
            }
            Err(e) => eprintln!("Skipping page {}: {e}", i + 1),
        }
    }

    if transactions.is_empty() {
        bail!("no transactions found in statement");
    }

    Ok(StatementData {
        initial_balance,
        transactions,
    })
}

/// Categorize, sort, and fold a validated statement. Total: the fallible
/// boundary is `collect_pages`, not this. A caller-supplied balance
/// override wins over the statement's own initial balance; with neither,
/// the balance defaults to 0.
pub(crate) fn analyze_statement(
    data: &StatementData,
    classifier: &Classifier,
    balance_override: Option<f64>,
) -> AnalysisSummary {
    let initial_balance = balance_override.or(data.initial_balance).unwrap_or(0.0);
    let transactions = analysis::normalize(&data.transactions, classifier);
    analysis::aggregate(transactions, initial_balance)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
