use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::application::{BudgetService, render_chart};
use crate::domain::{Cents, format_cents, parse_cents};
use crate::io::Exporter;

/// Budgetbook - per-category budget ledgers
#[derive(Parser)]
#[command(name = "budgetbook")]
#[command(about = "Build budget categories from the command line and print their reports")]
#[command(version)]
pub struct Cli {
    /// Operation to apply before the command runs, in order. One of:
    /// category:NAME, deposit:NAME:AMOUNT[:DESCRIPTION],
    /// withdraw:NAME:AMOUNT[:DESCRIPTION], transfer:FROM:TO:AMOUNT
    #[arg(long = "op", value_name = "OP", value_parser = parse_operation)]
    pub ops: Vec<Operation>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the itemized ledger of one category, or of all of them
    Ledger {
        /// Category name (omit for all categories)
        category: Option<String>,
    },

    /// Print the percentage-spent chart
    Chart {
        /// Only chart these categories, in this order
        #[arg(short, long)]
        category: Vec<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show balance for a category or all categories
    Balance {
        /// Category name (omit for all categories)
        category: Option<String>,
    },

    /// Export data to stdout as CSV or JSON
    Export {
        /// What to export: entries, book
        export_type: String,

        /// Format: csv, json (default: csv for entries, json for book)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Build the bundled sample book and print its reports.
    /// Cannot be combined with --op.
    Demo,
}

/// A single change to the book, given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Category(String),
    Deposit {
        category: String,
        amount: Cents,
        description: String,
    },
    Withdraw {
        category: String,
        amount: Cents,
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: Cents,
    },
}

/// Parse `kind:arg:...` into an [`Operation`]. Descriptions may contain `:`.
pub fn parse_operation(input: &str) -> Result<Operation> {
    let (kind, rest) = input
        .split_once(':')
        .with_context(|| format!("Operation '{}' is missing its arguments", input))?;

    let operation = match kind {
        "category" => {
            if rest.is_empty() {
                bail!("Category name must not be empty");
            }
            Operation::Category(rest.to_string())
        }
        "deposit" | "withdraw" => {
            let mut parts = rest.splitn(3, ':');
            let category = parts.next().unwrap_or_default().to_string();
            let amount = parts
                .next()
                .with_context(|| format!("Operation '{}' needs an amount", input))?;
            let amount = parse_cents(amount).context("Invalid amount format. Use '50.00' or '50'")?;
            let description = parts.next().unwrap_or_default().to_string();

            if kind == "deposit" {
                Operation::Deposit {
                    category,
                    amount,
                    description,
                }
            } else {
                Operation::Withdraw {
                    category,
                    amount,
                    description,
                }
            }
        }
        "transfer" => {
            let parts: Vec<&str> = rest.split(':').collect();
            let [from, to, amount] = parts.as_slice() else {
                bail!("Transfer must look like transfer:FROM:TO:AMOUNT, got '{}'", input);
            };
            Operation::Transfer {
                from: from.to_string(),
                to: to.to_string(),
                amount: parse_cents(amount).context("Invalid amount format. Use '50.00' or '50'")?,
            }
        }
        other => bail!(
            "Unknown operation '{}'. Valid operations: category, deposit, withdraw, transfer",
            other
        ),
    };

    Ok(operation)
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if matches!(self.command, Commands::Demo) && !self.ops.is_empty() {
            bail!("The demo command builds its own book and does not accept --op");
        }

        let service = match self.command {
            Commands::Demo => sample_book()?,
            _ => build_book(&self.ops, self.verbose)?,
        };

        match self.command {
            Commands::Ledger { category } => run_ledger_command(&service, category.as_deref())?,

            Commands::Chart { category, format } => {
                run_chart_command(&service, &category, &format)?
            }

            Commands::Balance { category } => run_balance_command(&service, category.as_deref())?,

            Commands::Export {
                export_type,
                format,
            } => run_export_command(&service, &export_type, format.as_deref())?,

            Commands::Demo => {
                run_ledger_command(&service, None)?;
                println!("{}", service.render_spend_chart());
            }
        }

        Ok(())
    }
}

/// Apply command-line operations to a fresh book.
///
/// A withdrawal or transfer the category can't cover is skipped with a
/// warning; anything else that goes wrong aborts the run.
pub fn build_book(ops: &[Operation], verbose: bool) -> Result<BudgetService> {
    let mut service = BudgetService::new();

    for op in ops {
        match op {
            Operation::Category(name) => {
                service.create_category(name.as_str())?;
                if verbose {
                    eprintln!("[op] created category {}", name);
                }
            }
            Operation::Deposit {
                category,
                amount,
                description,
            } => {
                service.deposit(category, *amount, description)?;
                if verbose {
                    eprintln!("[op] deposited {} into {}", format_cents(*amount), category);
                }
            }
            Operation::Withdraw {
                category,
                amount,
                description,
            } => {
                if service.withdraw(category, *amount, description)? {
                    if verbose {
                        eprintln!("[op] withdrew {} from {}", format_cents(*amount), category);
                    }
                } else {
                    eprintln!(
                        "Skipped withdrawal of {} from {}: insufficient funds",
                        format_cents(*amount),
                        category
                    );
                }
            }
            Operation::Transfer { from, to, amount } => {
                if service.transfer(from, to, *amount)? {
                    if verbose {
                        eprintln!(
                            "[op] transferred {} {} -> {}",
                            format_cents(*amount),
                            from,
                            to
                        );
                    }
                } else {
                    eprintln!(
                        "Skipped transfer of {} {} -> {}: insufficient funds",
                        format_cents(*amount),
                        from,
                        to
                    );
                }
            }
        }
    }

    Ok(service)
}

/// The sample book printed by `budgetbook demo`.
pub fn sample_book() -> Result<BudgetService> {
    let mut service = BudgetService::new();
    for name in ["Food", "Clothing", "Auto"] {
        service.create_category(name)?;
    }

    service.deposit("Food", 100000, "initial deposit")?;
    service.withdraw("Food", 1015, "groceries")?;
    service.withdraw("Food", 1589, "restaurant and more food for dessert")?;
    service.transfer("Food", "Clothing", 5000)?;
    service.withdraw("Clothing", 2555, "jeans")?;
    service.deposit("Auto", 100000, "initial deposit")?;
    service.withdraw("Auto", 1500, "car wash")?;

    Ok(service)
}

fn run_ledger_command(service: &BudgetService, category: Option<&str>) -> Result<()> {
    match category {
        Some(name) => print!("{}", service.render_category(name)?),
        None => {
            if service.categories().is_empty() {
                println!("No categories found.");
            }
            for category in service.categories() {
                print!("{}", category);
            }
        }
    }
    Ok(())
}

fn run_chart_command(service: &BudgetService, categories: &[String], format: &str) -> Result<()> {
    let chart = if categories.is_empty() {
        service.spend_chart()
    } else {
        service.spend_chart_for(categories)?
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&chart)?),
        "table" => println!("{}", render_chart(&chart)),
        other => bail!("Unknown chart format '{}'. Use 'table' or 'json'", other),
    }
    Ok(())
}

fn run_balance_command(service: &BudgetService, category: Option<&str>) -> Result<()> {
    match category {
        Some(name) => {
            let entry = service.get_balance(name)?;
            println!("{}: {}", entry.category.name(), format_cents(entry.balance));
        }
        None => {
            let entries = service.get_all_balances();
            if entries.is_empty() {
                println!("No categories found.");
            } else {
                println!("{:<20} {:>12} {:>12}", "CATEGORY", "BALANCE", "SPENT");
                println!("{}", "-".repeat(46));
                for entry in entries {
                    println!(
                        "{:<20} {:>12} {:>12}",
                        entry.category.name(),
                        format_cents(entry.balance),
                        format_cents(entry.category.spent())
                    );
                }
            }
        }
    }
    Ok(())
}

fn run_export_command(
    service: &BudgetService,
    export_type: &str,
    format: Option<&str>,
) -> Result<()> {
    let exporter = Exporter::new(service);
    let stdout = std::io::stdout();
    let writer = stdout.lock();

    match (export_type, format) {
        ("entries", None | Some("csv")) => {
            exporter.export_entries_csv(writer)?;
        }
        ("entries", Some("json")) => {
            exporter.export_entries_json(writer)?;
            println!();
        }
        ("book", None | Some("json")) => {
            exporter.export_book_json(writer)?;
            println!();
        }
        ("entries" | "book", Some(other)) => {
            bail!("Format '{}' is not supported for {} export", other, export_type)
        }
        (other, _) => bail!("Unknown export type '{}'. Use 'entries' or 'book'", other),
    }
    Ok(())
}
