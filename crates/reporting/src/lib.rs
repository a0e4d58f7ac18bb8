//! `kasbuku-reporting` — period income statement assembly.

pub mod income_statement;

pub use income_statement::{IncomeStatement, ProductCogs, income_statement};
