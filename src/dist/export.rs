use crate::aws::cloudfront::{DistributionRecord, ORIGIN_DOMAIN_NAME, ORIGIN_ID};
use crate::utils::errors::{AwsUtilsError, Result};
use crate::utils::output::{GetColumnValue, TableColumn};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Which field of the first origin names the export file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportNameField {
    #[default]
    OriginId,
    OriginDomain,
}

impl ExportNameField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::OriginId => ORIGIN_ID,
            Self::OriginDomain => ORIGIN_DOMAIN_NAME,
        }
    }
}

/// A distribution written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedConfig {
    pub origin_domain: String,
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub exported: Vec<ExportedConfig>,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy)]
pub enum ExportColumn {
    DomainName,
    File,
}

impl ExportColumn {
    pub const ALL: [ExportColumn; 2] = [Self::DomainName, Self::File];
}

impl TableColumn for ExportColumn {
    fn header(&self) -> &'static str {
        match self {
            Self::DomainName => "DomainName",
            Self::File => "File",
        }
    }
}

impl GetColumnValue for ExportedConfig {
    type Column = ExportColumn;

    fn get_column_value(&self, column: &ExportColumn) -> String {
        match column {
            ExportColumn::DomainName => self.origin_domain.clone(),
            ExportColumn::File => self
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

/// `<value>.json`, where value is the chosen field of the first origin
pub fn export_file_name(record: &DistributionRecord, field: ExportNameField) -> Option<String> {
    let origin = record.origins().first()?;
    origin
        .get_str(field.key())
        .map(|name| format!("{name}.json"))
}

/// Write every record to its own file in `dir`. Records that cannot be
/// named or written are skipped with a warning; a colliding name overwrites
/// the earlier file.
pub fn export_distributions(
    records: &[DistributionRecord],
    field: ExportNameField,
    dir: &Path,
) -> ExportReport {
    let mut report = ExportReport::default();

    for record in records {
        let Some(file_name) = export_file_name(record, field) else {
            tracing::warn!(
                "Distribution '{}' has no first origin with a string '{}', skipping export",
                record.id.as_deref().unwrap_or_default(),
                field.key()
            );
            report.skipped += 1;
            continue;
        };

        match write_config(record, dir, &file_name) {
            Ok(path) => {
                tracing::info!("Exported distribution to {}", path.display());
                report.exported.push(ExportedConfig {
                    origin_domain: record
                        .origins()
                        .first()
                        .and_then(|origin| origin.domain_name())
                        .unwrap_or_default()
                        .to_string(),
                    path,
                });
            }
            Err(e) => {
                tracing::warn!(
                    "Unable to create file '{}' in '{}': {}",
                    file_name,
                    dir.display(),
                    e
                );
                report.skipped += 1;
            }
        }
    }

    report
}

fn write_config(record: &DistributionRecord, dir: &Path, file_name: &str) -> Result<PathBuf> {
    if file_name.contains(['/', '\\']) {
        return Err(AwsUtilsError::InvalidInput(format!(
            "file name '{file_name}' contains a path separator"
        )));
    }

    let json = serde_json::to_string_pretty(record)?;
    let path = dir.join(file_name);
    fs::write(&path, json)?;
    Ok(path)
}
