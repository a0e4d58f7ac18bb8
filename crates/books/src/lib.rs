//! `kasbuku-books` — revenue and expense records, and the row sheets the
//! ledger pages are built from.

pub mod expense;
pub mod revenue;
pub mod sheet;

pub use expense::{ExpenseCategory, ExpenseEntry};
pub use revenue::{RevenueEntry, RevenueKind};
pub use sheet::{Row, Sheet};
