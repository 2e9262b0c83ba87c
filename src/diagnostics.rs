//! Reporting of skipped rows.
//!
//! Skipped rows never stop a run. They are handed to a [`Diagnostics`]
//! implementation as they happen: [`LogDiagnostics`] (the default) logs
//! them, [`MemoryDiagnostics`] keeps them for inspection.

use std::fmt::Debug;
use std::sync::Mutex;

use tracing::warn;

use crate::parser::SkippedRow;

/// Receives one call per skipped data row.
pub trait Diagnostics: Send + Sync + Debug {
    fn row_skipped(&self, row: &SkippedRow);
}

/// Logs each skipped row as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn row_skipped(&self, row: &SkippedRow) {
        warn!(
            stage = "parser",
            line = row.line,
            fields = ?row.fields,
            reason = %row.reason,
            "skipping line"
        );
    }
}

/// Collects skipped rows in memory.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    rows: Mutex<Vec<SkippedRow>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the rows reported so far.
    pub fn rows(&self) -> Vec<SkippedRow> {
        self.rows
            .lock()
            .map(|rows| rows.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn row_skipped(&self, row: &SkippedRow) {
        let mut rows = self
            .rows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rows.push(row.clone());
    }
}
