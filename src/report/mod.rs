//! Plain-text reports rendered from category ledgers.

pub mod chart;
pub mod statement;

pub use chart::{bucket_percent, render_spend_chart, ChartEntry, ChartOrder, ChartStyle, SpendChart};
pub use statement::{render_statement, StatementStyle};
