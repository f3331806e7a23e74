//! Audit record for one cleaning run.

use serde::Serialize;

/// Summary of everything one pipeline run did. Created by the driver at
/// pipeline start, extended with each stage's [`StageOutcome`], rendered into
/// the cleaning report at the end. Nothing persists across runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Audit {
    pub original_rows: usize,
    pub original_columns: usize,
    pub duplicates_removed: usize,
    pub nan_counts_before: usize,
    pub nan_counts_after: usize,
    /// Free-text notes in the order stages ran.
    pub notes: Vec<String>,
}

impl Audit {
    /// Start an audit from the freshly loaded table's shape.
    pub fn for_input(rows: usize, columns: usize, missing: usize) -> Self {
        Self {
            original_rows: rows,
            original_columns: columns,
            nan_counts_before: missing,
            ..Self::default()
        }
    }

    /// Fold one stage's contribution into the audit.
    pub fn absorb(&mut self, outcome: StageOutcome) {
        self.notes.extend(outcome.notes);
    }
}

/// One stage's immutable contribution to the audit.
///
/// Stages never share a mutable audit object; each returns its own notes and
/// the driver concatenates them in stage order.
#[derive(Debug, Clone, Default)]
pub struct StageOutcome {
    pub notes: Vec<String>,
}

impl StageOutcome {
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            notes: vec![message.into()],
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }
}
