use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    Cents, DESCRIPTION_WIDTH, Entry, EntryError, compute_balance, compute_spent, format_dollars,
    validate_amount,
};

pub type CategoryId = Uuid;

/// Width of a ledger printout, title and entry lines alike.
pub const REPORT_WIDTH: usize = 40;

/// A budget category with its own append-only ledger.
///
/// Entries are only ever added through [`Category::deposit`],
/// [`Category::withdraw`] and [`Category::transfer`]; an operation that
/// fails leaves the ledger exactly as it was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    name: String,
    ledger: Vec<Entry>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in the order they were recorded.
    pub fn ledger(&self) -> &[Entry] {
        &self.ledger
    }

    /// Add money to the category. Negative amounts are rejected.
    pub fn deposit(
        &mut self,
        amount: Cents,
        description: impl Into<String>,
    ) -> Result<(), EntryError> {
        validate_amount(amount)?;
        self.ensure_room_for(amount)?;
        self.ledger.push(Entry::new(amount, description));
        Ok(())
    }

    /// Take money out of the category.
    ///
    /// Returns `Ok(false)` without recording anything when the balance
    /// doesn't cover `amount`.
    pub fn withdraw(
        &mut self,
        amount: Cents,
        description: impl Into<String>,
    ) -> Result<bool, EntryError> {
        validate_amount(amount)?;
        if !self.check_funds(amount) {
            return Ok(false);
        }
        self.ledger.push(Entry::new(-amount, description));
        Ok(true)
    }

    /// Move money into `receiver`, recording one entry on each side.
    ///
    /// Funds and the receiver's headroom are checked before either ledger
    /// is touched, so a transfer is either recorded on both sides or on
    /// neither.
    pub fn transfer(&mut self, amount: Cents, receiver: &mut Category) -> Result<bool, EntryError> {
        validate_amount(amount)?;
        if !self.check_funds(amount) {
            return Ok(false);
        }
        receiver.ensure_room_for(amount)?;
        self.ledger
            .push(Entry::new(-amount, format!("Transfer to {}", receiver.name)));
        receiver
            .ledger
            .push(Entry::new(amount, format!("Transfer from {}", self.name)));
        Ok(true)
    }

    pub fn balance(&self) -> Cents {
        compute_balance(&self.ledger)
    }

    /// True when the balance covers `amount`.
    pub fn check_funds(&self, amount: Cents) -> bool {
        amount <= self.balance()
    }

    pub fn spent(&self) -> Cents {
        compute_spent(&self.ledger)
    }

    fn ensure_room_for(&self, amount: Cents) -> Result<(), EntryError> {
        let balance = self.balance();
        balance
            .checked_add(amount)
            .map(|_| ())
            .ok_or(EntryError::Overflow { balance, amount })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{:*^width$}", self.name, width = REPORT_WIDTH)?;
        for entry in &self.ledger {
            writeln!(
                f,
                "{:<desc$}{:>amount$}",
                entry.display_description(),
                format_dollars(entry.amount),
                desc = DESCRIPTION_WIDTH,
                amount = REPORT_WIDTH - DESCRIPTION_WIDTH,
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {:>33}", format_dollars(self.balance()))
    }
}
