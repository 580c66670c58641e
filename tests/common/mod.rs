// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use budgetbook::application::BudgetService;
use budgetbook::domain::{Category, Cents, parse_cents};

/// Parse a decimal amount, panicking on malformed test input
pub fn cents(amount: &str) -> Cents {
    parse_cents(amount).unwrap()
}

/// Test fixture: categories used across scenarios
pub struct StandardCategories;

impl StandardCategories {
    /// Food, Clothing and Auto with the spending used in the chart scenario:
    /// 105.55, 33.40 and 15.00 out of 153.95.
    pub fn chart_scenario() -> Result<Vec<Category>> {
        let mut food = Category::new("Food");
        food.deposit(cents("1000"), "")?;
        food.withdraw(cents("105.55"), "")?;

        let mut clothing = Category::new("Clothing");
        clothing.deposit(cents("500"), "")?;
        clothing.withdraw(cents("33.40"), "")?;

        let mut auto = Category::new("Auto");
        auto.deposit(cents("1000"), "")?;
        auto.withdraw(cents("15"), "")?;

        Ok(vec![food, clothing, auto])
    }

    /// The same scenario driven through the service
    pub fn chart_service() -> Result<BudgetService> {
        let mut service = BudgetService::new();
        for name in ["Food", "Clothing", "Auto"] {
            service.create_category(name)?;
        }
        service.deposit("Food", cents("1000"), "")?;
        service.withdraw("Food", cents("105.55"), "")?;
        service.deposit("Clothing", cents("500"), "")?;
        service.withdraw("Clothing", cents("33.40"), "")?;
        service.deposit("Auto", cents("1000"), "")?;
        service.withdraw("Auto", cents("15"), "")?;
        Ok(service)
    }
}
