use serde::{Deserialize, Serialize};

use crate::domain::{Category, Cents, REPORT_WIDTH};

const CHART_TITLE: &str = "Percentage spent by category";

/// Spending share of every category, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendChart {
    pub categories: Vec<CategorySpending>,
    pub total_spent: Cents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub spent: Cents,
    /// Share of the total, rounded down to a multiple of ten
    pub percentage: u8,
}

/// Compute the bucketed spending share of each category.
///
/// When nothing was spent at all every category gets 0%.
pub fn spend_chart(categories: &[Category]) -> SpendChart {
    let spent: Vec<Cents> = categories.iter().map(Category::spent).collect();
    let total_spent = spent
        .iter()
        .fold(0, |total: Cents, &amount| total.saturating_add(amount));

    let categories = categories
        .iter()
        .zip(spent)
        .map(|(category, spent)| CategorySpending {
            category: category.name().to_string(),
            spent,
            percentage: bucket_percentage(spent, total_spent),
        })
        .collect();

    SpendChart {
        categories,
        total_spent,
    }
}

fn bucket_percentage(spent: Cents, total_spent: Cents) -> u8 {
    if total_spent <= 0 {
        return 0;
    }
    let percent = i128::from(spent) * 100 / i128::from(total_spent);
    // spent <= total_spent, so this stays within 0..=100
    (percent / 10 * 10) as u8
}

/// Itemized ledger printout of one category.
pub fn render_category(category: &Category) -> String {
    category.to_string()
}

/// Render the spend chart as text: a title, one row per ten percent from
/// 100 down to 0, a separator and the category names written vertically.
///
/// The result carries no trailing newline.
pub fn render_spend_chart(categories: &[Category]) -> String {
    render_chart(&spend_chart(categories))
}

pub fn render_chart(chart: &SpendChart) -> String {
    let mut out = format!("{:*^width$}\n", CHART_TITLE, width = REPORT_WIDTH);

    for level in (0..=100u8).rev().step_by(10) {
        out.push_str(&format!("{:>3}| ", level));
        for column in &chart.categories {
            out.push_str(if column.percentage >= level { "o  " } else { "   " });
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "   {}\n",
        "-".repeat(chart.categories.len() * 3 + 1)
    ));

    let names: Vec<Vec<char>> = chart
        .categories
        .iter()
        .map(|column| column.category.chars().collect())
        .collect();
    let tallest = names.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..tallest {
        out.push_str("     ");
        for name in &names {
            match name.get(row) {
                Some(c) => {
                    out.push(*c);
                    out.push_str("  ");
                }
                None => out.push_str("   "),
            }
        }
        out.push('\n');
    }

    out.truncate(out.trim_end_matches('\n').len());
    out
}
