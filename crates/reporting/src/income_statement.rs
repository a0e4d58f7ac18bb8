//! Income statement for one reporting period.
//!
//! Pulls together the three books: revenue entries, per-product COGS
//! (via the period calculator), and expense entries. The assembled
//! statement is what the report page renders and what the export handed
//! to the server-rendered application serializes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kasbuku_books::{ExpenseCategory, ExpenseEntry, RevenueEntry, RevenueKind};
use kasbuku_core::ProductName;
use kasbuku_hpp::{PeriodCogs, PeriodEntries, period_cogs};

/// Per-product COGS line on the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCogs {
    pub product: ProductName,
    pub breakdown: PeriodCogs,
}

/// Assembled income statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue_business: Decimal,
    pub revenue_other: Decimal,
    pub total_revenue: Decimal,

    pub total_cogs: Decimal,
    pub cogs_per_product: Vec<ProductCogs>,

    pub expense_business: Decimal,
    pub expense_other: Decimal,
    /// COGS + all expenses.
    pub total_charges: Decimal,

    pub profit_before_tax: Decimal,
    /// Income tax is recorded separately by the tax module; zero here.
    pub income_tax: Decimal,
    pub profit_after_tax: Decimal,
}

/// Assemble the income statement for one period.
///
/// `hpp_entries` is ordered; the per-product lines come out in the same
/// order so the rendered report is stable.
pub fn income_statement(
    revenues: &[RevenueEntry],
    hpp_entries: &[(ProductName, PeriodEntries)],
    expenses: &[ExpenseEntry],
) -> IncomeStatement {
    let revenue_business = sum_revenue(revenues, RevenueKind::Business);
    let revenue_other = sum_revenue(revenues, RevenueKind::Other);
    let total_revenue = revenue_business + revenue_other;

    let mut total_cogs = Decimal::ZERO;
    let mut cogs_per_product = Vec::with_capacity(hpp_entries.len());
    for (product, entries) in hpp_entries {
        let breakdown = period_cogs(entries);
        total_cogs += breakdown.cogs;
        cogs_per_product.push(ProductCogs {
            product: product.clone(),
            breakdown,
        });
    }

    let expense_business = sum_expense(expenses, ExpenseCategory::Business);
    let expense_other = sum_expense(expenses, ExpenseCategory::Other);
    let total_charges = total_cogs + expense_business + expense_other;

    let profit_before_tax = total_revenue - total_charges;
    let income_tax = Decimal::ZERO;
    let profit_after_tax = profit_before_tax - income_tax;

    IncomeStatement {
        revenue_business,
        revenue_other,
        total_revenue,
        total_cogs,
        cogs_per_product,
        expense_business,
        expense_other,
        total_charges,
        profit_before_tax,
        income_tax,
        profit_after_tax,
    }
}

fn sum_revenue(revenues: &[RevenueEntry], kind: RevenueKind) -> Decimal {
    revenues
        .iter()
        .filter(|entry| entry.kind == kind)
        .map(|entry| entry.total)
        .sum()
}

fn sum_expense(expenses: &[ExpenseEntry], category: ExpenseCategory) -> Decimal {
    expenses
        .iter()
        .filter(|entry| entry.category == category)
        .map(|entry| entry.total)
        .sum()
}
