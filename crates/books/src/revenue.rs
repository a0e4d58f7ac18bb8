//! Revenue entries.
//!
//! Two kinds, matching the income page: business revenue (product sales,
//! quantity × selling price) and other revenue (a described amount).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kasbuku_core::ProductName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueKind {
    /// Revenue from the main line of business (product sales).
    Business,
    /// Other income (interest, one-off gains, ...).
    Other,
}

/// One recorded revenue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub kind: RevenueKind,
    /// Product name for business revenue, free-form description otherwise.
    pub name: String,
    pub quantity: i64,
    pub selling_price: Decimal,
    pub total: Decimal,
}

impl RevenueEntry {
    /// Business revenue: `quantity × selling_price`.
    pub fn business(product: &ProductName, quantity: i64, selling_price: Decimal) -> Self {
        Self {
            kind: RevenueKind::Business,
            name: product.as_str().to_string(),
            quantity,
            selling_price,
            total: Decimal::from(quantity) * selling_price,
        }
    }

    /// Other revenue: the amount is entered directly.
    pub fn other(description: impl Into<String>, total: Decimal) -> Self {
        Self {
            kind: RevenueKind::Other,
            name: description.into(),
            quantity: 1,
            selling_price: total,
            total,
        }
    }
}
