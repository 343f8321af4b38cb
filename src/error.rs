use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a report run. All variants are caught at the
/// top of the binary and turned into a printed message.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("failed to parse record {record}: {reason}")]
    Parse { record: u64, reason: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no valid trade data")]
    EmptyResult,

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
