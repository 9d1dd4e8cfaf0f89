use tracing::info;

use crate::errors::LedgerError;
use crate::report::chart::{ChartStyle, SpendChart};

use super::category::Category;

const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Ordered collection of uniquely named categories.
#[derive(Debug, Clone, Default)]
pub struct Budget {
    categories: Vec<Category>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, rejecting names already present.
    pub fn add_category(&mut self, category: Category) -> Result<&mut Category, LedgerError> {
        if self.position(category.name()).is_some() {
            return Err(LedgerError::DuplicateCategory(category.name().to_string()));
        }
        info!(category = %category.name(), "category added");
        self.categories.push(category);
        let last = self.categories.len() - 1;
        Ok(&mut self.categories[last])
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name() == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.name() == name)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Transfers between two categories of this budget by name.
    ///
    /// Returns `Ok(false)` when the source lacks funds, mirroring
    /// [`Category::transfer`].
    pub fn transfer(&mut self, from: &str, to: &str, amount: f64) -> Result<bool, LedgerError> {
        let source = self.resolve(from)?;
        let destination = self.resolve(to)?;
        if source == destination {
            return Err(LedgerError::SelfTransfer(from.to_string()));
        }
        let (source, destination) = pair_mut(&mut self.categories, source, destination);
        Ok(source.transfer(amount, destination))
    }

    /// Renders the spend chart over every category in insertion order.
    pub fn spend_chart(&self, style: &ChartStyle) -> String {
        SpendChart::from_categories(&self.categories).render(style)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.name() == name)
    }

    fn resolve(&self, name: &str) -> Result<usize, LedgerError> {
        self.position(name).ok_or_else(|| {
            let message = match self.suggest(name) {
                Some(hint) => format!("category `{name}` not found; did you mean `{hint}`?"),
                None => format!("category `{name}` not found"),
            };
            LedgerError::InvalidRef(message)
        })
    }

    fn suggest(&self, name: &str) -> Option<&str> {
        let needle = name.to_ascii_lowercase();
        self.categories
            .iter()
            .map(|category| {
                let score = strsim::jaro_winkler(&needle, &category.name().to_ascii_lowercase());
                (category.name(), score)
            })
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate)
    }
}

fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    if first < second {
        let (head, tail) = items.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
