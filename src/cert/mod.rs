pub mod listing;
pub mod status;

pub use listing::{certificate_rows, CertificateColumn, CertificateRow};
pub use status::ExpiryStatus;
