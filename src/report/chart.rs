//! Percentage-spent bar chart with vertically printed category names.
//!
//! ```text
//! Percentage spent by category
//! 100|
//!  90|
//!  ...
//!  10| o  o
//!   0| o  o
//!     -------
//!      c  f
//!      a  o
//!      r  o
//!         d
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::common::{Balanced, NamedEntity};

pub const DEFAULT_TITLE: &str = "Percentage spent by category";
pub const DEFAULT_MARKER: char = 'o';

const PERCENT_STEP: u32 = 10;
const LABEL_WIDTH: usize = 3;
const GUTTER: &str = "  ";

/// Column ordering applied before layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ChartOrder {
    /// Columns follow the order categories were supplied in.
    #[default]
    Input,
    /// Highest share first; ties keep their input order.
    DescendingShare,
}

/// Presentation options for [`SpendChart::render`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartStyle {
    pub title: String,
    pub marker: char,
    pub order: ChartOrder,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            marker: DEFAULT_MARKER,
            order: ChartOrder::Input,
        }
    }
}

/// One chart column: a category name and its balance at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub name: String,
    pub balance: f64,
}

impl ChartEntry {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}

/// Snapshot of category balances ready to be laid out as a bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendChart {
    entries: Vec<ChartEntry>,
}

impl SpendChart {
    pub fn new(entries: Vec<ChartEntry>) -> Self {
        Self { entries }
    }

    /// Captures the current name and balance of each category.
    pub fn from_categories<C: NamedEntity + Balanced>(categories: &[C]) -> Self {
        let entries = categories
            .iter()
            .map(|category| ChartEntry::new(category.name(), category.balance()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, entry| acc + entry.balance)
    }

    /// Bucketed share of each entry, in input order.
    ///
    /// A zero total yields 0 for every entry.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.entries
            .iter()
            .map(|entry| {
                if total == 0.0 {
                    0.0
                } else {
                    bucket_percent(entry.balance / total * 100.0)
                }
            })
            .collect()
    }

    pub fn render(&self, style: &ChartStyle) -> String {
        let mut columns: Vec<(Vec<char>, f64)> = self
            .entries
            .iter()
            .zip(self.percentages())
            .map(|(entry, percent)| (entry.name.chars().collect(), percent))
            .collect();
        if style.order == ChartOrder::DescendingShare {
            columns.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        }
        debug!(
            categories = columns.len(),
            total = self.total(),
            "rendering spend chart"
        );

        let label_rows = columns.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let mut rows = Vec::with_capacity(PERCENT_STEP as usize + 2 + label_rows);

        for threshold in (0..=PERCENT_STEP).rev().map(|step| step * PERCENT_STEP) {
            let mut row = format!("{:>width$}| ", threshold, width = LABEL_WIDTH);
            for (_, percent) in &columns {
                let filled = f64::from(threshold) <= *percent;
                row.push(if filled { style.marker } else { ' ' });
                row.push_str(GUTTER);
            }
            rows.push(row);
        }

        let mut dashes = " ".repeat(LABEL_WIDTH + 1);
        dashes.push('-');
        dashes.push_str(&"---".repeat(columns.len()));
        rows.push(dashes);

        for line in 0..label_rows {
            let mut row = " ".repeat(LABEL_WIDTH + 2);
            for (name, _) in &columns {
                row.push(name.get(line).copied().unwrap_or(' '));
                row.push_str(GUTTER);
            }
            rows.push(row);
        }

        let mut out = style.title.clone();
        for row in rows {
            out.push('\n');
            out.push_str(&row);
        }
        out
    }
}

/// Rounds a raw percentage to the nearest multiple of ten, ties to even.
///
/// `25` becomes `20` and `75` becomes `80`.
pub fn bucket_percent(raw: f64) -> f64 {
    (raw / f64::from(PERCENT_STEP)).round_ties_even() * f64::from(PERCENT_STEP)
}

/// Renders the default-styled chart for `categories` in the given order.
pub fn render_spend_chart<C: NamedEntity + Balanced>(categories: &[C]) -> String {
    SpendChart::from_categories(categories).render(&ChartStyle::default())
}
