pub mod cloudfront;
pub mod iam;
pub mod runner;

pub use runner::{AwsCli, SystemAwsCli};

use crate::utils::errors::Result;
use serde::de::DeserializeOwned;

/// Decode JSON printed by the aws CLI
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
