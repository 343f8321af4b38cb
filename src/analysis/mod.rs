pub mod metrics;
pub mod weekly;

pub use metrics::SummaryMetrics;
pub use weekly::WeeklyBucket;
