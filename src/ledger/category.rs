//! A named spending category backed by an append-only ledger.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::errors::LedgerError;
use crate::report::statement::{render_statement, StatementStyle};

use super::common::{Balanced, NamedEntity};
use super::record::Record;

/// Named owner of an append-only ledger of signed records.
///
/// Records are never reordered, edited, or removed, so the balance is always
/// the sum of every recorded amount.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Category {
    name: String,
    records: Vec<Record>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ledger entries in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a deposit. The amount is recorded as given, sign included.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        let description = description.into();
        debug!(category = %self.name, amount, %description, "deposit");
        self.records.push(Record::new(amount, description));
    }

    /// Withdraws `amount` when funds allow, returning whether it happened.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        self.try_withdraw(amount, description).is_ok()
    }

    /// Withdraws `amount`, reporting a shortfall as an error.
    ///
    /// Nothing is recorded when the withdrawal is refused.
    pub fn try_withdraw(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.ensure_funds(amount)?;
        let description = description.into();
        debug!(category = %self.name, amount, %description, "withdrawal");
        self.records.push(Record::new(-amount, description));
        Ok(())
    }

    /// Moves `amount` into `destination`, returning whether it happened.
    pub fn transfer(&mut self, amount: f64, destination: &mut Category) -> bool {
        self.try_transfer(amount, destination).is_ok()
    }

    /// Moves `amount` into `destination` as a linked withdrawal/deposit pair.
    ///
    /// Funds are checked before either ledger is touched; on error neither
    /// ledger changes.
    pub fn try_transfer(
        &mut self,
        amount: f64,
        destination: &mut Category,
    ) -> Result<(), LedgerError> {
        self.ensure_funds(amount)?;
        let outgoing = Record::new(-amount, format!("Transfer to {}", destination.name));
        let incoming = Record::new(amount, format!("Transfer from {}", self.name));
        self.records.push(outgoing);
        destination.records.push(incoming);
        debug!(from = %self.name, to = %destination.name, amount, "transfer");
        Ok(())
    }

    pub fn balance(&self) -> f64 {
        self.records
            .iter()
            .fold(0.0, |balance, record| balance + record.amount)
    }

    /// Returns `true` when `amount` does not exceed the current balance.
    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.balance()
    }

    /// Renders the itemized statement with a custom layout.
    pub fn statement(&self, style: &StatementStyle) -> String {
        render_statement(self, style)
    }

    fn ensure_funds(&self, amount: f64) -> Result<(), LedgerError> {
        let available = self.balance();
        if amount <= available {
            Ok(())
        } else {
            debug!(category = %self.name, amount, available, "insufficient funds");
            Err(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            })
        }
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Balanced for Category {
    fn balance(&self) -> f64 {
        Category::balance(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_statement(self, &StatementStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded(name: &str, amount: f64) -> Category {
        let mut category = Category::new(name);
        category.deposit(amount, "initial deposit");
        category
    }

    #[test]
    fn deposit_appends_signed_record() {
        let mut food = Category::new("test");
        food.deposit(1000.0, "testing deposit");
        assert_eq!(food.records(), &[Record::new(1000.0, "testing deposit")]);
    }

    #[test]
    fn negative_deposit_is_recorded_as_given() {
        let mut food = Category::new("food");
        food.deposit(-20.0, "refund reversal");
        assert_eq!(food.balance(), -20.0);
        assert_eq!(food.len(), 1);
    }

    #[test]
    fn withdraw_refuses_overdraft_without_recording() {
        let mut food = funded("food", 1000.0);
        assert!(food.withdraw(500.0, "testing withdrawal"));
        let before = food.records().to_vec();

        assert!(!food.withdraw(1500.0, "testing withdrawal too high"));
        assert_eq!(food.records(), before.as_slice());
        assert_eq!(food.balance(), 500.0);
    }

    #[test]
    fn try_withdraw_reports_shortfall() {
        let mut food = funded("food", 10.0);
        let err = food
            .try_withdraw(25.0, "too much")
            .expect_err("withdrawal should be refused");
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                requested: 25.0,
                available: 10.0,
            }
        );
    }

    #[test]
    fn withdrawing_entire_balance_leaves_zero() {
        let mut food = funded("food", 42.5);
        assert!(food.withdraw(42.5, ""));
        assert_eq!(food.balance(), 0.0);
    }

    #[test]
    fn check_funds_allows_equality_and_zero() {
        let mut food = funded("food", 1000.0);
        food.withdraw(600.0, "testing withdrawal");
        assert!(food.check_funds(100.0));
        assert!(food.check_funds(400.0));
        assert!(food.check_funds(0.0));
        assert!(!food.check_funds(700.0));
    }

    #[test]
    fn transfer_records_linked_pair() {
        let mut food = funded("food", 1000.0);
        let mut car = Category::new("car");

        assert!(food.transfer(155.0, &mut car));
        assert_eq!(
            food.records().last(),
            Some(&Record::new(-155.0, "Transfer to car"))
        );
        assert_eq!(car.records(), &[Record::new(155.0, "Transfer from food")]);
    }

    #[test]
    fn failed_transfer_touches_neither_ledger() {
        let mut food = funded("food", 100.0);
        let mut car = Category::new("car");
        let food_before = food.clone();

        assert!(!food.transfer(1550.0, &mut car));
        assert_eq!(food, food_before);
        assert!(car.is_empty());
    }

    #[test]
    fn nan_amounts_never_pass_the_funds_check() {
        let food = funded("food", 100.0);
        assert!(!food.check_funds(f64::NAN));
    }
}
