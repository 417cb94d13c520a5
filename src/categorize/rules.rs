use crate::models::Category;

/// One rule table entry: a category and its keyword substrings, both kept
/// in declaration order.
#[derive(Debug, Clone)]
pub(crate) struct CategoryRule {
    pub(crate) category: Category,
    pub(crate) keywords: Vec<String>,
}

impl CategoryRule {
    pub(crate) fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Ordered keyword table driving classification. Built once, read-only for
/// the process lifetime, and injected into the Classifier so tests can
/// substitute a smaller table.
///
/// Rule order is load-bearing: classification is first-match-wins, and some
/// keywords ("netflix", "spotify") appear under more than one category.
#[derive(Debug, Clone)]
pub(crate) struct RuleTable {
    rules: Vec<CategoryRule>,
}

impl RuleTable {
    pub(crate) fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub(crate) fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// The built-in table, one entry per category in precedence order.
    /// Unknown carries no keywords: it is the fallback, never matched.
    pub(crate) fn builtin() -> Self {
        Self::new(vec![
            CategoryRule::new(
                Category::Food,
                &[
                    "grocery",
                    "supermarket",
                    "restaurant",
                    "cafe",
                    "coffee",
                    "starbucks",
                    "mcdonald",
                    "burger",
                    "pizza",
                    "bakery",
                    "doordash",
                    "food",
                ],
            ),
            CategoryRule::new(
                Category::Shopping,
                &[
                    "amazon",
                    "walmart",
                    "target",
                    "ebay",
                    "etsy",
                    "best buy",
                    "ikea",
                    "clothing",
                    "department store",
                ],
            ),
            CategoryRule::new(
                Category::Leisure,
                &[
                    "netflix",
                    "spotify",
                    "cinema",
                    "movie",
                    "theater",
                    "concert",
                    "steam",
                    "playstation",
                    "xbox",
                    "golf",
                ],
            ),
            CategoryRule::new(
                Category::Transport,
                &[
                    "uber",
                    "lyft",
                    "taxi",
                    "shell",
                    "chevron",
                    "gas station",
                    "fuel",
                    "parking",
                    "transit",
                    "metro",
                    "airline",
                    "toll",
                ],
            ),
            CategoryRule::new(
                Category::Utilities,
                &[
                    "electric",
                    "water bill",
                    "internet",
                    "broadband",
                    "comcast",
                    "verizon",
                    "phone bill",
                    "utility",
                    "energy",
                ],
            ),
            CategoryRule::new(
                Category::Healthcare,
                &[
                    "pharmacy",
                    "cvs",
                    "walgreens",
                    "doctor",
                    "dental",
                    "hospital",
                    "clinic",
                    "medical",
                    "urgent care",
                ],
            ),
            CategoryRule::new(
                Category::Transfer,
                &[
                    "transfer", "zelle", "venmo", "paypal", "wire", "ach", "withdrawal", "atm",
                ],
            ),
            CategoryRule::new(
                Category::Investment,
                &[
                    "vanguard",
                    "fidelity",
                    "robinhood",
                    "schwab",
                    "etrade",
                    "brokerage",
                    "coinbase",
                    "dividend",
                    "401k",
                ],
            ),
            CategoryRule::new(
                Category::Subscription,
                &[
                    "netflix",
                    "spotify",
                    "subscription",
                    "membership",
                    "prime",
                    "hulu",
                    "patreon",
                    "icloud",
                ],
            ),
            CategoryRule::new(Category::Unknown, &[]),
        ])
    }
}
