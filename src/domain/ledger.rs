use super::{Cents, Entry};

/// Balance of a ledger: the sum of every entry amount.
///
/// Categories refuse appends that would overflow, so this only saturates
/// for slices assembled by hand.
pub fn compute_balance(entries: &[Entry]) -> Cents {
    entries
        .iter()
        .fold(0, |balance: Cents, entry| balance.saturating_add(entry.amount))
}

/// Money spent from a ledger: the sum of the absolute values of the
/// negative entries (withdrawals and outgoing transfers).
///
/// Saturates at `Cents::MAX`: money can cycle through a category more
/// than once, so spending isn't bounded by the balance.
pub fn compute_spent(entries: &[Entry]) -> Cents {
    entries
        .iter()
        .filter(|entry| entry.is_spending())
        .fold(0, |spent: Cents, entry| {
            spent.saturating_add(entry.amount.saturating_neg())
        })
}
