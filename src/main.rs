use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use trade_report::config::Config;
use trade_report::pipeline;

/// Analyze a CSV trade-history export and render a static HTML report.
#[derive(Parser, Debug)]
#[command(name = "trade-report", version, about)]
struct Cli {
    /// Path to the trade-history CSV export
    input: PathBuf,

    /// Output path for the HTML report (default: trade_analysis.html)
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    match pipeline::run(&cfg, &cli.input, cli.output.as_deref()) {
        Ok(path) => {
            println!("Success! Analysis generated in: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error processing file: {err}");
            ExitCode::FAILURE
        }
    }
}
