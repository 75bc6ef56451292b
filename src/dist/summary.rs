use crate::aws::cloudfront::{DistributionRecord, Origin};
use crate::utils::output::{GetColumnValue, TableColumn};

pub const ALIAS_SEPARATOR: &str = ",";

/// Flat view of a distribution used for listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionSummary {
    pub id: String,
    pub domain: String,
    pub alias: String,
    pub origin: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy)]
pub enum DistributionColumn {
    Id,
    Domain,
    Alias,
    Origin,
    Status,
}

impl DistributionColumn {
    pub const ALL: [DistributionColumn; 5] = [
        Self::Id,
        Self::Domain,
        Self::Alias,
        Self::Origin,
        Self::Status,
    ];
}

impl TableColumn for DistributionColumn {
    fn header(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Domain => "Domain",
            Self::Alias => "Alias",
            Self::Origin => "Origin",
            Self::Status => "Status",
        }
    }
}

impl GetColumnValue for DistributionSummary {
    type Column = DistributionColumn;

    fn get_column_value(&self, column: &DistributionColumn) -> String {
        match column {
            DistributionColumn::Id => self.id.clone(),
            DistributionColumn::Domain => self.domain.clone(),
            DistributionColumn::Alias => self.alias.clone(),
            DistributionColumn::Origin => self.origin.clone(),
            DistributionColumn::Status => self.status.clone(),
        }
    }
}

/// Domain of the primary origin: the last entry with an empty `OriginPath`.
///
/// A missing or non-string path never qualifies. If the chosen entry has no
/// string `DomainName` there is no primary origin.
pub fn primary_origin(origins: &[Origin]) -> Option<&str> {
    origins
        .iter()
        .rev()
        .find(|origin| origin.origin_path() == Some(""))
        .and_then(Origin::domain_name)
}

impl From<&DistributionRecord> for DistributionSummary {
    fn from(record: &DistributionRecord) -> Self {
        Self {
            id: record.id.clone().unwrap_or_default(),
            domain: record.domain_name.clone().unwrap_or_default(),
            alias: record.aliases().join(ALIAS_SEPARATOR),
            origin: primary_origin(record.origins())
                .unwrap_or_default()
                .to_string(),
            status: record.status.clone().unwrap_or_default(),
        }
    }
}

pub fn summarize(records: &[DistributionRecord]) -> Vec<DistributionSummary> {
    records.iter().map(DistributionSummary::from).collect()
}
