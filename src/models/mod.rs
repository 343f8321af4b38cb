pub mod trade;

pub use trade::{Trade, TradeSet};
