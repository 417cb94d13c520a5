mod rules;

pub(crate) use rules::{CategoryRule, RuleTable};

use crate::models::Category;

/// Type-hint substrings that mark a transaction as income-like. Checked
/// before the keyword table; a match short-circuits to `Transfer`, the
/// catch-all non-expenditure bucket.
const INCOME_HINTS: &[&str] = &["credit", "deposit", "income", "salary", "refund", "interest"];

pub(crate) struct Classifier {
    table: RuleTable,
}

impl Classifier {
    pub(crate) fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Assign exactly one category. Total: never fails.
    ///
    /// The collaborator's `type_hint` is consulted only for the income
    /// check; the authoritative category comes from the description text,
    /// first-match-wins in table order.
    pub(crate) fn classify(&self, description: &str, type_hint: &str) -> Category {
        let hint = type_hint.to_lowercase();
        if INCOME_HINTS.iter().any(|h| hint.contains(h)) {
            return Category::Transfer;
        }

        let desc = description.to_lowercase();
        for rule in self.table.rules() {
            if rule.keywords.iter().any(|k| desc.contains(k.as_str())) {
                return rule.category;
            }
        }

        Category::Unknown
    }
}
