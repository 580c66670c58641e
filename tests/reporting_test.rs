mod common;

use anyhow::Result;
use budgetbook::application::{render_category, render_spend_chart, spend_chart};
use budgetbook::domain::Category;
use common::{StandardCategories, cents};

#[test]
fn test_chart_scenario_percentages() -> Result<()> {
    let categories = StandardCategories::chart_scenario()?;
    let chart = spend_chart(&categories);

    assert_eq!(chart.total_spent, cents("153.95"));
    let buckets: Vec<u8> = chart.categories.iter().map(|c| c.percentage).collect();
    // 68.5% -> 60, 21.7% -> 20, 9.7% -> 0
    assert_eq!(buckets, vec![60, 20, 0]);
    Ok(())
}

#[test]
fn test_chart_scenario_rendering() -> Result<()> {
    let categories = StandardCategories::chart_scenario()?;

    let expected = [
        "******Percentage spent by category******",
        "100|          ",
        " 90|          ",
        " 80|          ",
        " 70|          ",
        " 60| o        ",
        " 50| o        ",
        " 40| o        ",
        " 30| o        ",
        " 20| o  o     ",
        " 10| o  o     ",
        "  0| o  o  o  ",
        "   ----------",
        "     F  C  A  ",
        "     o  l  u  ",
        "     o  o  t  ",
        "     d  t  o  ",
        "        h     ",
        "        i     ",
        "        n     ",
        "        g     ",
    ]
    .join("\n");

    assert_eq!(render_spend_chart(&categories), expected);
    Ok(())
}

#[test]
fn test_chart_has_no_trailing_newline() -> Result<()> {
    let categories = StandardCategories::chart_scenario()?;
    assert!(!render_spend_chart(&categories).ends_with('\n'));
    Ok(())
}

#[test]
fn test_chart_column_order_follows_input() -> Result<()> {
    let mut categories = StandardCategories::chart_scenario()?;
    categories.reverse();

    let rendered = render_spend_chart(&categories);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[5], " 60|       o  ");
    assert_eq!(lines[13], "     A  C  F  ");
    Ok(())
}

#[test]
fn test_chart_with_nothing_spent_marks_only_zero_row() -> Result<()> {
    let mut food = Category::new("Food");
    food.deposit(cents("100"), "")?;
    let business = Category::new("Business");

    let categories = vec![food, business];
    let chart = spend_chart(&categories);
    assert_eq!(chart.total_spent, 0);
    assert!(chart.categories.iter().all(|c| c.percentage == 0));

    let rendered = render_spend_chart(&categories);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "100|       ");
    assert_eq!(lines[10], " 10|       ");
    assert_eq!(lines[11], "  0| o  o  ");
    assert_eq!(lines[12], "   -------");
    Ok(())
}

#[test]
fn test_chart_counts_outgoing_transfers_as_spending() -> Result<()> {
    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");
    food.deposit(cents("100"), "")?;
    food.transfer(cents("75"), &mut clothing)?;
    clothing.withdraw(cents("25"), "")?;

    let chart = spend_chart(&[food, clothing]);
    assert_eq!(chart.categories[0].spent, cents("75"));
    assert_eq!(chart.categories[0].percentage, 70);
    assert_eq!(chart.categories[1].percentage, 20);
    Ok(())
}

#[test]
fn test_render_category_matches_display() -> Result<()> {
    let mut food = Category::new("Food");
    food.deposit(cents("12.5"), "snacks")?;
    assert_eq!(render_category(&food), food.to_string());
    Ok(())
}

#[test]
fn test_chart_json_shape() -> Result<()> {
    let categories = StandardCategories::chart_scenario()?;
    let value = serde_json::to_value(spend_chart(&categories))?;

    assert_eq!(value["total_spent"], 15395);
    assert_eq!(value["categories"][0]["category"], "Food");
    assert_eq!(value["categories"][0]["percentage"], 60);
    Ok(())
}
