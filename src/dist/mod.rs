pub mod export;
pub mod sort;
pub mod summary;

pub use export::{export_distributions, ExportColumn, ExportNameField, ExportReport, ExportedConfig};
pub use sort::{sort_summaries, OrderBy};
pub use summary::{primary_origin, summarize, DistributionColumn, DistributionSummary};
