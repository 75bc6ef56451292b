use crate::aws::iam::ServerCertificateMetadata;
use crate::cert::ExpiryStatus;
use crate::utils::output::{GetColumnValue, TableColumn};
use chrono::{DateTime, Utc};

/// One line of the certificate listing
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateRow {
    pub id: String,
    pub name: String,
    pub status: ExpiryStatus,
}

#[derive(Debug, Clone, Copy)]
pub enum CertificateColumn {
    Id,
    Name,
    Status,
}

impl CertificateColumn {
    pub const ALL: [CertificateColumn; 3] = [Self::Id, Self::Name, Self::Status];
}

impl TableColumn for CertificateColumn {
    fn header(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Status => "Status",
        }
    }
}

impl GetColumnValue for CertificateRow {
    type Column = CertificateColumn;

    fn get_column_value(&self, column: &CertificateColumn) -> String {
        match column {
            CertificateColumn::Id => self.id.clone(),
            CertificateColumn::Name => self.name.clone(),
            CertificateColumn::Status => self.status.to_string(),
        }
    }
}

impl CertificateRow {
    pub fn new(cert: &ServerCertificateMetadata, now: DateTime<Utc>) -> Self {
        Self {
            id: cert.server_certificate_id.clone(),
            name: cert.server_certificate_name.clone(),
            status: ExpiryStatus::classify(cert.expiration, now),
        }
    }
}

/// Classify every certificate, keeping the provider's order
pub fn certificate_rows(
    certificates: &[ServerCertificateMetadata],
    now: DateTime<Utc>,
) -> Vec<CertificateRow> {
    certificates
        .iter()
        .map(|cert| CertificateRow::new(cert, now))
        .collect()
}
