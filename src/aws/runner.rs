use crate::utils::config::Settings;
use crate::utils::errors::{AwsUtilsError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Boundary to the provider's command line tool
pub trait AwsCli {
    /// Run `<service> <operation>` and return its standard output
    fn run(&self, service: &str, operation: &str) -> Result<Vec<u8>>;
}

/// Runs the installed `aws` executable
#[derive(Debug, Clone)]
pub struct SystemAwsCli {
    exe: PathBuf,
    global_args: Vec<String>,
}

impl SystemAwsCli {
    pub fn new(settings: &Settings) -> Result<Self> {
        // Find the aws executable
        let exe = which::which(&settings.aws_bin).map_err(|_| {
            AwsUtilsError::CommandNotFound(format!(
                "{} not found in PATH. Please install the AWS CLI.",
                settings.aws_bin
            ))
        })?;

        Ok(Self {
            exe,
            global_args: global_args(settings),
        })
    }

    pub fn command_args(&self, service: &str, operation: &str) -> Vec<String> {
        let mut args = vec![service.to_string(), operation.to_string()];
        args.extend(self.global_args.iter().cloned());
        args
    }
}

/// Arguments appended to every invocation
fn global_args(settings: &Settings) -> Vec<String> {
    let mut args = vec!["--output".to_string(), "json".to_string()];
    if let Some(profile) = &settings.profile {
        args.extend(["--profile".to_string(), profile.clone()]);
    }
    if let Some(region) = &settings.region {
        args.extend(["--region".to_string(), region.clone()]);
    }
    args
}

impl AwsCli for SystemAwsCli {
    fn run(&self, service: &str, operation: &str) -> Result<Vec<u8>> {
        let args = self.command_args(service, operation);
        let command_line = format!("{} {}", self.exe.display(), args.join(" "));

        tracing::debug!("Executing: {}", command_line);

        let output = Command::new(&self.exe)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AwsUtilsError::CommandFailed {
                command: command_line.clone(),
                code: "not started".to_string(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let code = match output.status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(AwsUtilsError::CommandFailed {
                command: command_line,
                code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!("Received {} bytes from {} {}", output.stdout.len(), service, operation);
        Ok(output.stdout)
    }
}
