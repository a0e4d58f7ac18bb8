//! Row sheets with stored-total grand totals.
//!
//! A sheet is the in-memory model of one visible list of ledger rows.
//! Each row stores the monetary total it was recorded with; the grand
//! total is always the sum of the *stored* totals of the rows currently
//! present, so removing a row and re-summing is exact and idempotent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kasbuku_core::RowId;

/// One recorded row: a stored total plus section-specific detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row<T> {
    pub id: RowId,
    pub recorded_at: DateTime<Utc>,
    /// Total as computed at record time, unrounded. Included verbatim in
    /// the grand total, negatives too.
    pub total: Decimal,
    pub detail: T,
}

/// Ordered collection of rows for one page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet<T> {
    rows: Vec<Row<T>>,
}

impl<T> Default for Sheet<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> Sheet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, storing its total, and return the new row's id.
    pub fn push(&mut self, total: Decimal, detail: T) -> RowId {
        let id = RowId::new();
        self.rows.push(Row {
            id,
            recorded_at: Utc::now(),
            total,
            detail,
        });
        id
    }

    /// Remove the row with the given id, returning it if present.
    pub fn remove(&mut self, id: RowId) -> Option<Row<T>> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index))
    }

    /// Sum of the stored totals of the rows currently present.
    pub fn grand_total(&self) -> Decimal {
        self.rows.iter().map(|row| row.total).sum()
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
