pub mod aws;
pub mod cert;
pub mod cli;
pub mod dist;
pub mod utils;

// Re-export specific items to avoid conflicts
pub use aws::{AwsCli, SystemAwsCli};
pub use cert::{CertificateRow, ExpiryStatus};
pub use cli::{args, commands};
pub use dist::{DistributionSummary, ExportNameField, OrderBy};
pub use utils::{config, errors, output};
