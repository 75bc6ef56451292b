use crate::dist::ExportNameField;
use crate::utils::config::Config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "awsutils")]
#[command(version)]
#[command(about = "Summarise AWS IAM server certificates and CloudFront distributions")]
#[command(long_about = None)]
pub struct Cli {
    /// aws executable to run (name on PATH or absolute path)
    #[arg(long, env = "AWSUTILS_AWS_BIN", global = true)]
    pub aws_bin: Option<String>,

    /// Named aws profile passed through to the aws CLI
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Region passed through to the aws CLI
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Config file path (default: ~/.config/awsutils/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress diagnostics
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line, layered over the config file
    pub fn overrides(&self) -> Config {
        let (export_name_from, order_by) = match &self.command {
            Commands::Cloudfront {
                command: CloudfrontCommands::ExportConfigs { name_from, .. },
            } => (*name_from, None),
            Commands::Cloudfront {
                command: CloudfrontCommands::Dists { order_by, .. },
            } => (None, order_by.clone()),
            _ => (None, None),
        };

        Config {
            aws_bin: self.aws_bin.clone(),
            profile: self.profile.clone(),
            region: self.region.clone(),
            export_name_from,
            order_by,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Use the AWS IAM API
    Iam {
        #[command(subcommand)]
        command: IamCommands,
    },
    /// Use the AWS CloudFront API
    #[command(alias = "cf")]
    Cloudfront {
        #[command(subcommand)]
        command: CloudfrontCommands,
    },
    /// Generate shell completion scripts
    Completion {
        #[command(subcommand)]
        command: CompletionCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum IamCommands {
    /// Summarise server certificates available in your AWS account
    Certs,
}

#[derive(Subcommand, Debug)]
pub enum CloudfrontCommands {
    /// Export every distribution configuration to <name>.json
    ExportConfigs {
        /// First-origin field used to name each file
        #[arg(long, value_enum)]
        name_from: Option<ExportNameField>,
        /// Directory to write into (default: current directory)
        #[arg(long, value_hint = clap::ValueHint::DirPath)]
        output_dir: Option<PathBuf>,
    },
    /// Summarise distribution configurations
    Dists {
        /// Sort results on alias|origin|status
        #[arg(long, value_name = "alias|origin|status")]
        order_by: Option<String>,
        /// Output as semicolon separated values
        #[arg(long)]
        csv: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate bash completion script
    Bash,
    /// Generate zsh completion script
    Zsh,
    /// Generate fish completion script
    Fish,
    /// Generate PowerShell completion script
    PowerShell,
}

impl CompletionCommands {
    pub fn shell(&self) -> Shell {
        match self {
            CompletionCommands::Bash => Shell::Bash,
            CompletionCommands::Zsh => Shell::Zsh,
            CompletionCommands::Fish => Shell::Fish,
            CompletionCommands::PowerShell => Shell::PowerShell,
        }
    }
}
