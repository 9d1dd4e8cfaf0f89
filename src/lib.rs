#![doc(test(attr(deny(warnings))))]

//! Spend Tracker keeps per-category spending ledgers in memory and renders
//! plain-text reports over them: itemized category statements and a
//! percentage-spent bar chart.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use errors::{ConfigError, LedgerError};
pub use ledger::{Balanced, Budget, Category, NamedEntity, Record};
pub use report::{render_spend_chart, ChartOrder, ChartStyle, SpendChart, StatementStyle};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spend Tracker tracing initialized.");
    });
}
