use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::application::BudgetService;
use crate::domain::{Category, format_cents};

/// Snapshot of every category and its ledger
#[derive(Debug, Clone, Serialize)]
pub struct BookSnapshot<'a> {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub categories: &'a [Category],
}

/// Writes the contents of a budget book in machine-readable formats.
pub struct Exporter<'a> {
    service: &'a BudgetService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a BudgetService) -> Self {
        Self { service }
    }

    /// Export ledger entries of every category to CSV, in category order
    /// and then ledger order.
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "category", "recorded_at", "description", "amount"])?;

        let mut count = 0;
        for category in self.service.categories() {
            for entry in category.ledger() {
                csv_writer.write_record([
                    entry.id.to_string(),
                    category.name().to_string(),
                    entry.recorded_at.to_rfc3339(),
                    entry.description.clone(),
                    format_cents(entry.amount),
                ])?;
                count += 1;
            }
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export ledger entries of every category to a JSON array.
    pub fn export_entries_json<W: Write>(&self, writer: W) -> Result<usize> {
        #[derive(Serialize)]
        struct Row<'r> {
            category: &'r str,
            #[serde(flatten)]
            entry: &'r crate::domain::Entry,
        }

        let rows: Vec<Row<'_>> = self
            .service
            .categories()
            .iter()
            .flat_map(|category| {
                category.ledger().iter().map(move |entry| Row {
                    category: category.name(),
                    entry,
                })
            })
            .collect();

        serde_json::to_writer_pretty(writer, &rows)?;
        Ok(rows.len())
    }

    /// Export the whole book as a JSON snapshot.
    pub fn export_book_json<W: Write>(&self, writer: W) -> Result<BookSnapshot<'a>> {
        let snapshot = BookSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            categories: self.service.categories(),
        };

        serde_json::to_writer_pretty(writer, &snapshot)?;
        Ok(snapshot)
    }
}
