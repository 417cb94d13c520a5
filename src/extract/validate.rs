use anyhow::{anyhow, bail, Result};
use serde_json::{Map, Value};

use crate::models::{ExtractedPageData, RawTransaction};

/// Structural shape check for one page of extraction output.
///
/// Confirms the candidate looks like
/// `{ initial_balance?: number, transactions: [{date, description, type, amount}] }`
/// and nothing more: semantic plausibility (date validity, amount
/// magnitude) is not checked here. Rejections name the offending field so
/// the caller can log a useful skip diagnostic.
pub(crate) fn validate_page_data(candidate: &Value) -> Result<ExtractedPageData> {
    let Some(obj) = candidate.as_object() else {
        bail!("page payload is not a JSON object");
    };

    let initial_balance = match obj.get("initial_balance") {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            v.as_f64()
                .ok_or_else(|| anyhow!("'initial_balance' is not a number"))?,
        ),
    };

    let Some(list) = obj.get("transactions").and_then(Value::as_array) else {
        bail!("missing or non-array 'transactions' field");
    };

    let mut transactions = Vec::with_capacity(list.len());
    for (i, item) in list.iter().enumerate() {
        transactions.push(validate_transaction(item, i + 1)?);
    }

    Ok(ExtractedPageData {
        initial_balance,
        transactions,
    })
}

fn validate_transaction(item: &Value, row: usize) -> Result<RawTransaction> {
    let Some(obj) = item.as_object() else {
        bail!("transaction {row}: not a JSON object");
    };

    let date = require_string(obj, "date", row)?;
    let description = require_string(obj, "description", row)?;
    let kind = require_string(obj, "type", row)?;
    let amount = obj
        .get("amount")
        .and_then(Value::as_f64)
        .ok_or_else(|| anyhow!("transaction {row}: missing or non-numeric 'amount'"))?;

    // Running balance is advisory; anything non-numeric is dropped.
    let balance = obj.get("balance").and_then(Value::as_f64);

    Ok(RawTransaction {
        date,
        description,
        kind,
        amount,
        balance,
    })
}

fn require_string(obj: &Map<String, Value>, field: &str, row: usize) -> Result<String> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow!("transaction {row}: missing or non-text '{field}'"))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
