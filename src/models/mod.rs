mod category;
mod page;
mod summary;
mod transaction;

pub use category::Category;
pub use page::ExtractedPageData;
pub use summary::{AnalysisSummary, CategoryTotals};
pub use transaction::{RawTransaction, Transaction};
