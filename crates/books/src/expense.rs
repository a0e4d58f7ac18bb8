//! Expense entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Operating expenses of the main business (rent, wages, utilities).
    Business,
    /// Other expenses outside the main business.
    Other,
}

/// One recorded expense entry; the amount is entered directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub category: ExpenseCategory,
    pub name: String,
    pub total: Decimal,
}

impl ExpenseEntry {
    pub fn new(category: ExpenseCategory, name: impl Into<String>, total: Decimal) -> Self {
        Self {
            category,
            name: name.into(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn carries_category_and_total() {
        let entry = ExpenseEntry::new(ExpenseCategory::Business, "Sewa toko", dec!(1500000));
        assert_eq!(entry.category, ExpenseCategory::Business);
        assert_eq!(entry.total, dec!(1500000));
    }
}
