//! # Check Report
//!
//! Collects the validation outcome of every item read in one run.
//!
//! ## JSON Shape
//! ```json
//! {
//!   "checkedAt": "2026-10-19T09:00:00Z",
//!   "items": [
//!     {
//!       "source": "items.json",
//!       "index": 0,
//!       "item": { "itemName": "Book", "price": 1000, "quantity": 5 },
//!       "valid": false,
//!       "errors": [ { "field": null, "code": "totalPriceMin", "args": [10000, 5000], ... } ]
//!     }
//!   ],
//!   "totalErrors": 1
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};

use item_core::{Item, ItemValidator, ValidationError};

use crate::config::OutputFormat;

/// Outcome for one item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReport {
    /// File path, or `stdin`.
    pub source: String,
    /// Position of the item inside its document.
    pub index: usize,
    pub item: Item,
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Outcome for a whole run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub checked_at: DateTime<Utc>,
    pub items: Vec<ItemReport>,
    pub total_errors: usize,
}

impl Default for CheckReport {
    fn default() -> Self {
        CheckReport {
            checked_at: Utc::now(),
            items: Vec::new(),
            total_errors: 0,
        }
    }
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `items` from `source` and records the results.
    pub fn check(&mut self, validator: &ItemValidator, source: &str, items: Vec<Item>) {
        for (index, item) in items.into_iter().enumerate() {
            let errors = validator.validate_item(&item).into_errors();
            self.total_errors += errors.len();
            self.items.push(ItemReport {
                source: source.to_string(),
                index,
                item,
                valid: errors.is_empty(),
                errors,
            });
        }
    }

    /// True when no item recorded an error.
    pub fn all_valid(&self) -> bool {
        self.items.iter().all(|report| report.valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.items.iter().filter(|report| !report.valid).count()
    }

    /// Writes the report in the requested format.
    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> io::Result<()> {
        match format {
            OutputFormat::Json => self.write_json(out),
            OutputFormat::Text => self.write_text(out),
        }
    }

    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for report in &self.items {
            if report.valid {
                writeln!(out, "{}[{}]: ok", report.source, report.index)?;
                continue;
            }
            writeln!(
                out,
                "{}[{}]: {} error(s)",
                report.source,
                report.index,
                report.errors.len()
            )?;
            for error in &report.errors {
                writeln!(out, "  {error}")?;
            }
        }
        writeln!(
            out,
            "checked {} item(s), {} invalid, {} error(s)",
            self.items.len(),
            self.invalid_count(),
            self.total_errors
        )
    }
}
