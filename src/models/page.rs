use serde::{Deserialize, Serialize};

use super::RawTransaction;

/// Extraction output for a single statement page. Only the first valid
/// page's `initial_balance` is honored when a document spans pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<f64>,
    pub transactions: Vec<RawTransaction>,
}
