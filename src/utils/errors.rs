use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsUtilsError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Command `{command}` failed ({code}): {stderr}")]
    CommandFailed {
        command: String,
        code: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AwsUtilsError>;
