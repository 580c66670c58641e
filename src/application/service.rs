use crate::domain::{Category, Cents};

use super::{AppError, SpendChart, render_chart, render_spend_chart, spend_chart};

/// A set of budget categories addressed by name.
/// This is the primary interface for any client (CLI, tests, embedding code).
///
/// Categories keep the order they were created in; that order is the
/// column order of the spend chart.
#[derive(Debug, Default)]
pub struct BudgetService {
    categories: Vec<Category>,
}

/// Balance entry for a category
pub struct BalanceEntry<'a> {
    pub category: &'a Category,
    pub balance: Cents,
}

impl BudgetService {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Category operations
    // ========================

    /// Create a new, empty category.
    pub fn create_category(&mut self, name: impl Into<String>) -> Result<&Category, AppError> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(AppError::CategoryAlreadyExists(name));
        }
        self.categories.push(Category::new(name));
        Ok(&self.categories[self.categories.len() - 1])
    }

    pub fn get_category(&self, name: &str) -> Result<&Category, AppError> {
        self.position(name)
            .map(|index| &self.categories[index])
            .ok_or_else(|| AppError::CategoryNotFound(name.to_string()))
    }

    /// All categories in creation order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get_balance(&self, name: &str) -> Result<BalanceEntry<'_>, AppError> {
        let category = self.get_category(name)?;
        Ok(BalanceEntry {
            category,
            balance: category.balance(),
        })
    }

    pub fn get_all_balances(&self) -> Vec<BalanceEntry<'_>> {
        self.categories
            .iter()
            .map(|category| BalanceEntry {
                category,
                balance: category.balance(),
            })
            .collect()
    }

    // ========================
    // Ledger operations
    // ========================

    pub fn deposit(&mut self, name: &str, amount: Cents, description: &str) -> Result<(), AppError> {
        let index = self.index_of(name)?;
        self.categories[index].deposit(amount, description)?;
        Ok(())
    }

    /// Returns `Ok(false)` when the category can't cover the withdrawal.
    pub fn withdraw(
        &mut self,
        name: &str,
        amount: Cents,
        description: &str,
    ) -> Result<bool, AppError> {
        let index = self.index_of(name)?;
        Ok(self.categories[index].withdraw(amount, description)?)
    }

    /// Returns `Ok(false)` when the sender can't cover the transfer.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Cents) -> Result<bool, AppError> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;
        if from_index == to_index {
            return Err(AppError::SelfTransfer(from.to_string()));
        }

        let (sender, receiver) = pair_mut(&mut self.categories, from_index, to_index);
        Ok(sender.transfer(amount, receiver)?)
    }

    // ========================
    // Reports
    // ========================

    pub fn render_category(&self, name: &str) -> Result<String, AppError> {
        Ok(super::render_category(self.get_category(name)?))
    }

    pub fn spend_chart(&self) -> SpendChart {
        spend_chart(&self.categories)
    }

    pub fn render_spend_chart(&self) -> String {
        render_spend_chart(&self.categories)
    }

    /// Spend chart restricted to the named categories, in the given order.
    pub fn spend_chart_for(&self, names: &[String]) -> Result<SpendChart, AppError> {
        let selected = names
            .iter()
            .map(|name| self.get_category(name).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(spend_chart(&selected))
    }

    pub fn render_spend_chart_for(&self, names: &[String]) -> Result<String, AppError> {
        Ok(render_chart(&self.spend_chart_for(names)?))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    fn index_of(&self, name: &str) -> Result<usize, AppError> {
        self.position(name)
            .ok_or_else(|| AppError::CategoryNotFound(name.to_string()))
    }
}

/// Borrow two distinct categories mutably at once.
fn pair_mut(categories: &mut [Category], a: usize, b: usize) -> (&mut Category, &mut Category) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = categories.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = categories.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_rejects_duplicates() {
        let mut service = BudgetService::new();
        service.create_category("Food").unwrap();

        assert!(matches!(
            service.create_category("Food"),
            Err(AppError::CategoryAlreadyExists(name)) if name == "Food"
        ));
        assert_eq!(service.categories().len(), 1);
    }

    #[test]
    fn test_unknown_category() {
        let mut service = BudgetService::new();
        assert!(matches!(
            service.deposit("Food", 100, ""),
            Err(AppError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_spend_chart_for_selects_in_given_order() {
        let mut service = BudgetService::new();
        for name in ["Food", "Clothing", "Auto"] {
            service.create_category(name).unwrap();
            service.deposit(name, 1000, "").unwrap();
        }
        service.withdraw("Food", 300, "").unwrap();
        service.withdraw("Auto", 700, "").unwrap();

        let chart = service
            .spend_chart_for(&["Auto".to_string(), "Food".to_string()])
            .unwrap();

        let columns: Vec<(&str, u8)> = chart
            .categories
            .iter()
            .map(|c| (c.category.as_str(), c.percentage))
            .collect();
        assert_eq!(columns, [("Auto", 70), ("Food", 30)]);
        assert_eq!(chart.total_spent, 1000);

        assert!(matches!(
            service.spend_chart_for(&["Travel".to_string()]),
            Err(AppError::CategoryNotFound(name)) if name == "Travel"
        ));
    }

    #[test]
    fn test_pair_mut_in_both_orders() {
        let mut categories = vec![Category::new("A"), Category::new("B"), Category::new("C")];

        let (first, second) = pair_mut(&mut categories, 0, 2);
        assert_eq!((first.name(), second.name()), ("A", "C"));

        let (first, second) = pair_mut(&mut categories, 2, 1);
        assert_eq!((first.name(), second.name()), ("C", "B"));
    }

    #[test]
    fn test_transfer_to_self_is_rejected() {
        let mut service = BudgetService::new();
        service.create_category("Food").unwrap();
        service.deposit("Food", 1000, "").unwrap();

        assert!(matches!(
            service.transfer("Food", "Food", 100),
            Err(AppError::SelfTransfer(_))
        ));
        assert_eq!(service.get_balance("Food").unwrap().balance, 1000);
    }

    #[test]
    fn test_transfer_backwards_in_creation_order() {
        let mut service = BudgetService::new();
        service.create_category("Food").unwrap();
        service.create_category("Clothing").unwrap();
        service.deposit("Clothing", 1000, "").unwrap();

        assert!(service.transfer("Clothing", "Food", 400).unwrap());
        assert_eq!(service.get_balance("Clothing").unwrap().balance, 600);
        assert_eq!(service.get_balance("Food").unwrap().balance, 400);
    }
}
