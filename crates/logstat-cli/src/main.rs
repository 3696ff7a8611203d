use anyhow::Result;
use clap::Parser;
use logstat_cli::OutputFormat;
use logstat_cli::commands;
use logstat_core::config::ReportConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logstat")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Build per-endpoint reports from newline-delimited JSON access logs",
    long_about = "logstat reads one or more web-server access logs (one JSON object per line), \
                  optionally keeps only the records of a single day, and prints a report table.",
    after_help = "EXAMPLES:\n  \
                  logstat -f access.log -r average\n  \
                  logstat --file logs/*.log --report average --date 2025-06-22"
)]
struct Cli {
    /// Log file(s) with one JSON object per line
    #[arg(short, long = "file", value_name = "FILE", num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Report type (average, user_agent)
    #[arg(short, long, value_name = "TYPE")]
    report: String,

    /// Only include records from this day (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    date: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty", env = "LOGSTAT_FORMAT")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Reject bad report types and dates before any file is opened
    let config = ReportConfig::from_args(cli.files, &cli.report, cli.date.as_deref())?;

    commands::report::execute(&config, cli.format)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("logstat=debug,logstat_cli=debug,logstat_core=debug")
    } else {
        EnvFilter::new("logstat=info,logstat_cli=info,logstat_core=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
