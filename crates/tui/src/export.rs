//! Writes the one-way export snapshot to disk.

use std::fs;

use api_types::expense::Expense;
use chrono::Utc;
use engine::export;

use crate::error::Result;

/// Serializes the current record set plus its summary into
/// `expenses-YYYY-MM-DD.json` in the working directory and returns the file
/// name.
pub fn write_snapshot(expenses: &[Expense]) -> Result<String> {
    let now = Utc::now();
    let snapshot = export::snapshot(expenses, now);
    let file_name = export::file_name(now);

    let payload = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&file_name, payload)?;

    Ok(file_name)
}
