use std::path::{Path, PathBuf};

use tracing::info;

use crate::analysis::{weekly, SummaryMetrics};
use crate::config::Config;
use crate::error::ReportError;
use crate::report;
use crate::{filter, loader};

/// Run the whole report pipeline: load, filter, compute, aggregate, render,
/// write. Returns the path of the written report. Nothing is written unless
/// every prior stage succeeded.
pub fn run(cfg: &Config, input: &Path, output: Option<&Path>) -> Result<PathBuf, ReportError> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&cfg.default_output));

    let rows = loader::load(input)?;
    let trades = filter::build_trade_set(rows, &cfg.excluded_symbols)?;

    let metrics = SummaryMetrics::from_trades(&trades);
    let weeks = weekly::aggregate(&trades);
    info!(
        "{} trades, win rate {:.2}%, {} weekly buckets",
        metrics.total_trades,
        metrics.win_rate,
        weeks.len()
    );

    let document = report::render(&metrics, &weeks, cfg.style, &cfg.currency_prefix);
    report::write_report(&output, &document)?;

    Ok(output)
}
