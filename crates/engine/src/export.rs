//! One-way export snapshot.
//!
//! The dashboard can dump the full in-memory record set plus its computed
//! summary as a structured document for the user to keep externally. There
//! is no corresponding import.

use api_types::expense::Expense;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::summary::total_spent;

#[derive(Debug, Serialize)]
pub struct ExportSnapshot {
    pub expenses: Vec<Expense>,
    pub summary: ExportSummary,
}

#[derive(Debug, Serialize)]
pub struct ExportSummary {
    /// Total spend in major units, two-decimal precision.
    pub total_spent: f64,
    pub total_transactions: usize,
    /// RFC3339 timestamp of when the snapshot was taken.
    pub export_date: DateTime<Utc>,
}

/// Builds the snapshot for the given record set at the given instant.
#[must_use]
pub fn snapshot(expenses: &[Expense], now: DateTime<Utc>) -> ExportSnapshot {
    ExportSnapshot {
        summary: ExportSummary {
            total_spent: total_spent(expenses).to_major(),
            total_transactions: expenses.len(),
            export_date: now,
        },
        expenses: expenses.to_vec(),
    }
}

/// Suggested file name for a snapshot taken at `now`, e.g.
/// `expenses-2026-08-23.json`.
#[must_use]
pub fn file_name(now: DateTime<Utc>) -> String {
    format!("expenses-{}.json", now.format("%Y-%m-%d"))
}
