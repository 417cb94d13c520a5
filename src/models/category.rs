use serde::Serialize;

/// Fixed, closed category set. Declaration order is the classification
/// precedence order and must not be reordered casually: overlapping
/// keywords across categories make first-match classification depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Shopping,
    Leisure,
    Transport,
    Utilities,
    Healthcare,
    Transfer,
    Investment,
    Subscription,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Leisure => "leisure",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Healthcare => "healthcare",
            Self::Transfer => "transfer",
            Self::Investment => "investment",
            Self::Subscription => "subscription",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "food" => Self::Food,
            "shopping" => Self::Shopping,
            "leisure" => Self::Leisure,
            "transport" => Self::Transport,
            "utilities" => Self::Utilities,
            "healthcare" => Self::Healthcare,
            "transfer" => Self::Transfer,
            "investment" => Self::Investment,
            "subscription" => Self::Subscription,
            _ => Self::Unknown,
        }
    }

    /// All categories in declaration (precedence) order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Shopping,
            Self::Leisure,
            Self::Transport,
            Self::Utilities,
            Self::Healthcare,
            Self::Transfer,
            Self::Investment,
            Self::Subscription,
            Self::Unknown,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
