use crate::dist::ExportNameField;
use crate::utils::errors::{AwsUtilsError, Result};
use crate::utils::paths::AwsUtilsPaths;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_AWS_BIN: &str = "aws";
pub const DEFAULT_ORDER_BY: &str = "alias";

/// Optional settings read from `config.yaml`, or collected from command line flags
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub aws_bin: Option<String>,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub export_name_from: Option<ExportNameField>,
    pub order_by: Option<String>,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub aws_bin: String,
    pub profile: Option<String>,
    pub region: Option<String>,
    pub export_name_from: ExportNameField,
    pub order_by: String,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().into_settings()
    }
}

impl Config {
    /// Load the config file. An explicit path must exist; the default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AwsUtilsError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }

        match AwsUtilsPaths::config_file() {
            Ok(path) if path.exists() => Self::load_file(&path),
            Ok(path) => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                tracing::debug!("{e}, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| AwsUtilsError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Values set in `overrides` win over values in `self`
    pub fn merge(self, overrides: Config) -> Self {
        Self {
            aws_bin: overrides.aws_bin.or(self.aws_bin),
            profile: overrides.profile.or(self.profile),
            region: overrides.region.or(self.region),
            export_name_from: overrides.export_name_from.or(self.export_name_from),
            order_by: overrides.order_by.or(self.order_by),
        }
    }

    pub fn into_settings(self) -> Settings {
        Settings {
            aws_bin: self.aws_bin.unwrap_or_else(|| DEFAULT_AWS_BIN.to_string()),
            profile: self.profile,
            region: self.region,
            export_name_from: self.export_name_from.unwrap_or_default(),
            order_by: self
                .order_by
                .unwrap_or_else(|| DEFAULT_ORDER_BY.to_string()),
        }
    }
}
