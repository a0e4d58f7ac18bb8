//! Running stock ledger with weighted-average ending valuation.
//!
//! One accumulator per product name, fed additively by opening-inventory
//! and purchase entries. Ending-inventory entries only *read* the
//! accumulator: they price the requested quantity at the weighted-average
//! unit cost and classify the stock state. Values accumulate unrounded;
//! display rounding is the caller's job (`kasbuku_core::money`).

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kasbuku_core::{DomainError, DomainResult, ProductName};

/// One purchase entry, net of discount, returns and shipping.
///
/// All fields default to zero; negative values are not rejected, so a
/// heavy return can drive the net total below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub quantity: i64,
    pub unit_price: Decimal,
    pub discount: Decimal,
    pub return_quantity: i64,
    pub shipping_cost: Decimal,
}

impl PurchaseLine {
    /// Monetary value of the returned units, at this line's unit price.
    pub fn return_value(&self) -> Decimal {
        Decimal::from(self.return_quantity) * self.unit_price
    }

    /// Net total: `quantity × unit_price − discount − return_value + shipping`.
    pub fn net_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price - self.discount - self.return_value()
            + self.shipping_cost
    }
}

/// Per-product accumulator.
///
/// Exists from the first opening or purchase entry for the product and is
/// never evicted; the ledger that owns it defines the session lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStock {
    pub opening_quantity: i64,
    pub opening_value: Decimal,
    pub purchased_quantity: i64,
    pub purchased_value: Decimal,
}

impl ProductStock {
    pub fn available_quantity(&self) -> i64 {
        self.opening_quantity + self.purchased_quantity
    }

    pub fn available_value(&self) -> Decimal {
        self.opening_value + self.purchased_value
    }

    /// Weighted-average unit cost, zero when nothing is available.
    pub fn average_unit_cost(&self) -> Decimal {
        let qty = self.available_quantity();
        if qty > 0 {
            self.available_value() / Decimal::from(qty)
        } else {
            Decimal::ZERO
        }
    }
}

/// Classification of an ending-inventory request against available stock.
///
/// Ordered by precedence: an entry can only carry one status, evaluated
/// top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndingStatus {
    /// Ending quantity requested for a product with no recorded stock.
    #[serde(rename = "invalid: no prior stock")]
    NoPriorStock,
    /// Requested more units than are available. Valuation is zeroed.
    #[serde(rename = "insufficient stock")]
    InsufficientStock,
    /// Ending quantity equals available quantity: nothing was sold, which
    /// usually means a sales entry is missing.
    #[serde(rename = "check sales")]
    CheckSales,
    #[serde(rename = "ok")]
    Ok,
}

impl EndingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndingStatus::InsufficientStock => "insufficient stock",
            EndingStatus::NoPriorStock => "invalid: no prior stock",
            EndingStatus::CheckSales => "check sales",
            EndingStatus::Ok => "ok",
        }
    }

    /// Error states zero the valuation and get error styling.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            EndingStatus::InsufficientStock | EndingStatus::NoPriorStock
        )
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, EndingStatus::CheckSales)
    }
}

impl core::fmt::Display for EndingStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of valuing an ending-inventory quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingValuation {
    pub quantity: i64,
    pub average_unit_cost: Decimal,
    /// `quantity × average_unit_cost`, forced to zero on error states.
    pub valued_amount: Decimal,
    pub status: EndingStatus,
}

/// In-memory stock ledger keyed by product name.
///
/// Owned by the page session; dropping the ledger is the reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLedger {
    products: HashMap<ProductName, ProductStock>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator for a product, if it has been referenced.
    pub fn product(&self, name: &ProductName) -> Option<&ProductStock> {
        self.products.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Record beginning inventory: `quantity` units at `unit_price` each.
    ///
    /// Both inputs must be non-negative (zero permitted). Returns the row
    /// total `quantity × unit_price`.
    pub fn record_opening(
        &mut self,
        name: &ProductName,
        quantity: i64,
        unit_price: Decimal,
    ) -> DomainResult<Decimal> {
        if quantity < 0 {
            return Err(DomainError::validation(
                "opening quantity cannot be negative",
            ));
        }
        if unit_price < Decimal::ZERO {
            return Err(DomainError::validation(
                "opening unit price cannot be negative",
            ));
        }

        let total = Decimal::from(quantity) * unit_price;
        let stock = self.products.entry(name.clone()).or_default();
        stock.opening_quantity += quantity;
        stock.opening_value += total;
        Ok(total)
    }

    /// Record a purchase entry and return its net total.
    ///
    /// No range validation here: returns and discounts may legitimately
    /// push the net total negative.
    pub fn record_purchase(&mut self, name: &ProductName, line: &PurchaseLine) -> Decimal {
        let net_total = line.net_total();
        let stock = self.products.entry(name.clone()).or_default();
        stock.purchased_quantity += line.quantity;
        stock.purchased_value += net_total;
        net_total
    }

    /// Value an ending-inventory quantity at the weighted-average cost.
    ///
    /// Read-only: never creates or mutates an accumulator.
    pub fn value_ending(&self, name: &ProductName, quantity: i64) -> EndingValuation {
        let stock = self.products.get(name).copied().unwrap_or_default();
        let available_qty = stock.available_quantity();
        let average_unit_cost = stock.average_unit_cost();
        let valued = Decimal::from(quantity) * average_unit_cost;

        // No-prior-stock is checked first: with nothing available, any
        // positive quantity would also trip the insufficient-stock check,
        // but the row should say the product was never stocked at all.
        let (status, valued_amount) = if available_qty == 0 && quantity > 0 {
            (EndingStatus::NoPriorStock, Decimal::ZERO)
        } else if quantity > available_qty {
            (EndingStatus::InsufficientStock, Decimal::ZERO)
        } else if quantity == available_qty && available_qty > 0 {
            (EndingStatus::CheckSales, valued)
        } else {
            (EndingStatus::Ok, valued)
        };

        EndingValuation {
            quantity,
            average_unit_cost,
            valued_amount,
            status,
        }
    }
}
