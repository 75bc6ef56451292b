use crate::aws::{cloudfront, iam, AwsCli, SystemAwsCli};
use crate::cert::{certificate_rows, CertificateColumn};
use crate::cli::args::*;
use crate::cli::completions::handle_completion_command;
use crate::dist::{
    export_distributions, sort_summaries, summarize, DistributionColumn, ExportColumn, OrderBy,
};
use crate::utils::config::{Config, Settings};
use crate::utils::errors::Result;
use crate::utils::output::OutputFormat;
use crate::utils::paths::AwsUtilsPaths;
use chrono::Utc;
use std::io::{self, Write};
use std::path::PathBuf;

pub fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "awsutils=warn",  // Default: warnings only
            1 => "awsutils=info",  // -v: info level
            2 => "awsutils=debug", // -vv: debug level
            _ => "awsutils=trace", // -vvv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    // Completion scripts need neither config nor the aws binary
    if let Commands::Completion { command } = &cli.command {
        return handle_completion_command(command, &mut io::stdout());
    }

    let settings = Config::load(cli.config.as_deref())?
        .merge(cli.overrides())
        .into_settings();
    tracing::debug!("Resolved settings: {:?}", settings);

    let aws = SystemAwsCli::new(&settings)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    dispatch(&cli.command, &aws, &settings, &mut out)
}

/// Route a parsed command path to its handler
pub fn dispatch<W: Write>(
    command: &Commands,
    aws: &dyn AwsCli,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Iam {
            command: IamCommands::Certs,
        } => handle_iam_certs(aws, out),
        Commands::Cloudfront {
            command: CloudfrontCommands::ExportConfigs { output_dir, .. },
        } => handle_cloudfront_export(aws, settings, output_dir.clone(), out),
        Commands::Cloudfront {
            command: CloudfrontCommands::Dists { csv, .. },
        } => handle_cloudfront_dists(aws, settings, *csv, out),
        Commands::Completion { command } => handle_completion_command(command, out),
    }
}

fn handle_iam_certs<W: Write>(aws: &dyn AwsCli, out: &mut W) -> Result<()> {
    let certificates = iam::list_server_certificates(aws)?;
    let rows = certificate_rows(&certificates, Utc::now());

    OutputFormat::new(false).write_records(out, &rows, &CertificateColumn::ALL)?;
    Ok(())
}

fn handle_cloudfront_export<W: Write>(
    aws: &dyn AwsCli,
    settings: &Settings,
    output_dir: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    let records = cloudfront::list_distributions(aws)?;
    let dir = AwsUtilsPaths::export_dir(output_dir)?;

    let report = export_distributions(&records, settings.export_name_from, &dir);
    if report.skipped > 0 {
        tracing::warn!(
            "Exported {} of {} distributions to {}",
            report.exported.len(),
            records.len(),
            dir.display()
        );
    }

    OutputFormat::new(false).write_records(out, &report.exported, &ExportColumn::ALL)?;
    Ok(())
}

fn handle_cloudfront_dists<W: Write>(
    aws: &dyn AwsCli,
    settings: &Settings,
    csv: bool,
    out: &mut W,
) -> Result<()> {
    let records = cloudfront::list_distributions(aws)?;
    let mut summaries = summarize(&records);

    sort_summaries(&mut summaries, OrderBy::resolve(&settings.order_by));

    OutputFormat::new(csv).write_records(out, &summaries, &DistributionColumn::ALL)?;
    Ok(())
}
