use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::Cents;

pub type EntryId = Uuid;

/// Width of the description column in a ledger printout.
pub const DESCRIPTION_WIDTH: usize = 30;

/// A single ledger line. Entries are immutable once appended to a category:
/// positive amounts are money in, negative amounts are money spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Signed amount in cents
    pub amount: Cents,
    /// Free text, stored in full and only truncated when printed
    pub description: String,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(amount: Cents, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    /// True for withdrawals and outgoing transfers.
    pub fn is_spending(&self) -> bool {
        self.amount < 0
    }

    /// The description as shown in a printout: at most 30 characters.
    pub fn display_description(&self) -> &str {
        match self.description.char_indices().nth(DESCRIPTION_WIDTH) {
            Some((cut, _)) => &self.description[..cut],
            None => &self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("amount must not be negative, got {0} cents")]
    NegativeAmount(Cents),

    #[error("adding {amount} cents to a balance of {balance} cents would overflow")]
    Overflow { balance: Cents, amount: Cents },
}

/// Reject negative amounts; zero is allowed.
pub fn validate_amount(amount: Cents) -> Result<(), EntryError> {
    if amount < 0 {
        return Err(EntryError::NegativeAmount(amount));
    }
    Ok(())
}
