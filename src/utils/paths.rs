use crate::utils::errors::{AwsUtilsError, Result};
use std::path::PathBuf;

pub struct AwsUtilsPaths;
const PROGRAM_NAME: &str = "awsutils";

impl AwsUtilsPaths {
    /// Get the config directory: ~/.config/awsutils/
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| AwsUtilsError::Config("Cannot determine config directory".to_string()))
    }

    /// Get the default config file: ~/.config/awsutils/config.yaml
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Resolve the export directory, defaulting to the working directory
    pub fn export_dir(output_dir: Option<PathBuf>) -> Result<PathBuf> {
        match output_dir {
            Some(dir) => Ok(dir),
            None => Ok(std::env::current_dir()?),
        }
    }
}
