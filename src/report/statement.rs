use serde::{Deserialize, Serialize};

use crate::ledger::category::Category;

pub const DEFAULT_WIDTH: usize = 30;
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 23;
pub const DEFAULT_FILL: char = '*';

/// Fixed-width layout for a category statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatementStyle {
    pub width: usize,
    pub description_width: usize,
    pub fill: char,
}

impl Default for StatementStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
            fill: DEFAULT_FILL,
        }
    }
}

/// Renders the banner, one line per record, and the closing total.
///
/// ```
/// use spend_tracker::{Category, StatementStyle};
/// use spend_tracker::report::render_statement;
///
/// let mut food = Category::new("test");
/// food.deposit(1000.0, "testing deposit");
/// food.withdraw(600.0, "testing withdrawal");
///
/// let expected = "*************test*************\n\
///                 testing deposit        1000.00\n\
///                 testing withdrawal     -600.00\n\
///                 Total: 400.0";
/// assert_eq!(render_statement(&food, &StatementStyle::default()), expected);
/// ```
pub fn render_statement(category: &Category, style: &StatementStyle) -> String {
    let mut out = center(category.name(), style.width, style.fill);
    for record in category.records() {
        let description: String = record
            .description
            .chars()
            .take(style.description_width)
            .collect();
        let amount_width = style.width.saturating_sub(description.chars().count());
        out.push('\n');
        out.push_str(&description);
        out.push_str(&format!("{:>amount_width$.2}", record.amount));
    }
    out.push_str("\nTotal: ");
    out.push_str(&format_total(category.balance()));
    out
}

// Odd padding goes right for even widths and left for odd widths.
fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

fn format_total(balance: f64) -> String {
    format!("{balance:?}")
}
