use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::categorize::Classifier;
use crate::models::{AnalysisSummary, Category, CategoryTotals, RawTransaction, Transaction};

/// Convert raw records to canonical transactions and establish chronological
/// order. Date/description/amount are copied verbatim; the category comes
/// from the classifier. Pure function of its input.
///
/// Dates parse as `%Y-%m-%d` calendar dates. A record whose date does not
/// parse is kept, not rejected: it sorts after every parseable record, with
/// input order preserved among unparseable ones.
pub(crate) fn normalize(raw: &[RawTransaction], classifier: &Classifier) -> Vec<Transaction> {
    let mut txns: Vec<Transaction> = raw
        .iter()
        .map(|r| Transaction {
            date: r.date.clone(),
            description: r.description.clone(),
            amount: r.amount,
            category: classifier.classify(&r.description, &r.kind),
        })
        .collect();

    // sort_by_key is stable: equal dates keep their input order.
    txns.sort_by_key(|t| match parse_date(&t.date) {
        Some(d) => (false, Some(d)),
        None => (true, None),
    });

    txns
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Fold an already categorized, already sorted sequence into the summary.
/// Single pass, total, deterministic.
///
/// A zero amount accrues to expenditure (adding nothing) rather than
/// income; the count views below treat zero differently on purpose.
pub(crate) fn aggregate(transactions: Vec<Transaction>, initial_balance: f64) -> AnalysisSummary {
    let mut expenditure_by_category: CategoryTotals =
        Category::all().iter().map(|c| (*c, 0.0)).collect();

    let mut total_income = 0.0;
    let mut total_expenditure = 0.0;

    for t in &transactions {
        if t.amount > 0.0 {
            total_income += t.amount;
        } else {
            total_expenditure += t.amount;
            if let Some(bucket) = expenditure_by_category.get_mut(&t.category) {
                *bucket += t.amount;
            }
        }
    }

    AnalysisSummary {
        initial_balance,
        final_balance: initial_balance + total_income + total_expenditure,
        total_income,
        total_expenditure,
        expenditure_by_category,
        transaction_details: transactions,
    }
}

// ── Read-only views for presentation ──────────────────────────

/// Count of expenditure transactions (amount < 0) per category. Every
/// category is present, 0 when unused. Zero-amount transactions are not
/// counted.
pub(crate) fn counts_by_category(transactions: &[Transaction]) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> =
        Category::all().iter().map(|c| (*c, 0)).collect();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        if let Some(n) = counts.get_mut(&t.category) {
            *n += 1;
        }
    }
    counts
}

pub(crate) fn income_count(transactions: &[Transaction]) -> usize {
    transactions.iter().filter(|t| t.is_income()).count()
}

pub(crate) fn expenditure_count(transactions: &[Transaction]) -> usize {
    transactions.iter().filter(|t| t.is_expense()).count()
}

/// Per-month activity: `(YYYY-MM, transaction count, signed net total)`,
/// chronological. The month is the date's text prefix, so records with
/// unparseable dates group under whatever their first seven characters are.
pub(crate) fn monthly_totals(transactions: &[Transaction]) -> Vec<(String, usize, f64)> {
    let mut by_month: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for t in transactions {
        let month: String = t.date.chars().take(7).collect();
        let entry = by_month.entry(month).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += t.amount;
    }
    by_month
        .into_iter()
        .map(|(month, (count, total))| (month, count, total))
        .collect()
}

#[cfg(test)]
mod tests;
