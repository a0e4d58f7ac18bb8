//! Raw form payloads and their validation.
//!
//! Fields arrive exactly as submitted (strings). Validation is a
//! presence check: every listed field must be non-blank, or the whole
//! submission is rejected before any state changes. Parsing after that
//! is lenient on purpose: a field that does not parse as a number counts
//! as zero, matching how the pages have always behaved.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kasbuku_books::ExpenseCategory;
use kasbuku_core::{DomainError, DomainResult, ProductName};
use kasbuku_hpp::PurchaseLine;

/// HPP entry form: the product name plus one category of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HppForm {
    pub product_name: String,
    pub entry: HppEntryForm,
}

/// The category-specific fields of an HPP submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum HppEntryForm {
    Opening {
        quantity: String,
        description: String,
        unit_price: String,
    },
    Purchase {
        quantity: String,
        description: String,
        unit_price: String,
        discount: String,
        return_quantity: String,
        shipping_cost: String,
    },
    Ending {
        quantity: String,
        description: String,
    },
}

/// Revenue form: business sale or other income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RevenueForm {
    Business {
        product_name: String,
        quantity: String,
        selling_price: String,
    },
    Other {
        description: String,
        total: String,
    },
}

/// Expense form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub category: ExpenseCategory,
    pub name: String,
    pub total: String,
}

/// Validated opening submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningInput {
    pub product: ProductName,
    pub quantity: i64,
    pub description: String,
    pub unit_price: Decimal,
}

/// Validated purchase submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseInput {
    pub product: ProductName,
    pub description: String,
    pub line: PurchaseLine,
}

/// Validated ending submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingInput {
    pub product: ProductName,
    pub quantity: i64,
    pub description: String,
}

/// Validated HPP submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HppInput {
    Opening(OpeningInput),
    Purchase(PurchaseInput),
    Ending(EndingInput),
}

impl HppForm {
    /// Presence-check every required field, then parse.
    pub fn validate(&self) -> DomainResult<HppInput> {
        let product = ProductName::new(&self.product_name)?;

        match &self.entry {
            HppEntryForm::Opening {
                quantity,
                description,
                unit_price,
            } => {
                require(quantity, "quantity")?;
                require(description, "description")?;
                require(unit_price, "unit price")?;
                Ok(HppInput::Opening(OpeningInput {
                    product,
                    quantity: parse_quantity(quantity),
                    description: description.trim().to_string(),
                    unit_price: parse_amount(unit_price),
                }))
            }
            HppEntryForm::Purchase {
                quantity,
                description,
                unit_price,
                discount,
                return_quantity,
                shipping_cost,
            } => {
                require(quantity, "quantity")?;
                require(description, "description")?;
                require(unit_price, "unit price")?;
                require(discount, "discount")?;
                require(return_quantity, "return quantity")?;
                require(shipping_cost, "shipping cost")?;
                Ok(HppInput::Purchase(PurchaseInput {
                    product,
                    description: description.trim().to_string(),
                    line: PurchaseLine {
                        quantity: parse_quantity(quantity),
                        unit_price: parse_amount(unit_price),
                        discount: parse_amount(discount),
                        return_quantity: parse_quantity(return_quantity),
                        shipping_cost: parse_amount(shipping_cost),
                    },
                }))
            }
            HppEntryForm::Ending {
                quantity,
                description,
            } => {
                require(quantity, "quantity")?;
                require(description, "description")?;
                Ok(HppInput::Ending(EndingInput {
                    product,
                    quantity: parse_quantity(quantity),
                    description: description.trim().to_string(),
                }))
            }
        }
    }
}

/// Validated revenue submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevenueInput {
    Business {
        product: ProductName,
        quantity: i64,
        selling_price: Decimal,
    },
    Other {
        description: String,
        total: Decimal,
    },
}

impl RevenueForm {
    pub fn validate(&self) -> DomainResult<RevenueInput> {
        match self {
            RevenueForm::Business {
                product_name,
                quantity,
                selling_price,
            } => {
                let product = ProductName::new(product_name)?;
                require(quantity, "quantity")?;
                require(selling_price, "selling price")?;
                Ok(RevenueInput::Business {
                    product,
                    quantity: parse_quantity(quantity),
                    selling_price: parse_amount(selling_price),
                })
            }
            RevenueForm::Other { description, total } => {
                require(description, "description")?;
                require(total, "total")?;
                Ok(RevenueInput::Other {
                    description: description.trim().to_string(),
                    total: parse_amount(total),
                })
            }
        }
    }
}

/// Validated expense submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub category: ExpenseCategory,
    pub name: String,
    pub total: Decimal,
}

impl ExpenseForm {
    pub fn validate(&self) -> DomainResult<ExpenseInput> {
        require(&self.name, "name")?;
        require(&self.total, "total")?;
        Ok(ExpenseInput {
            category: self.category,
            name: self.name.trim().to_string(),
            total: parse_amount(&self.total),
        })
    }
}

fn require(field: &str, label: &str) -> DomainResult<()> {
    if field.trim().is_empty() {
        return Err(DomainError::validation(format!("{label} is required")));
    }
    Ok(())
}

fn parse_quantity(field: &str) -> i64 {
    field.trim().parse().unwrap_or(0)
}

fn parse_amount(field: &str) -> Decimal {
    field.trim().parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn opening_form(product: &str, quantity: &str, price: &str) -> HppForm {
        HppForm {
            product_name: product.to_string(),
            entry: HppEntryForm::Opening {
                quantity: quantity.to_string(),
                description: "stok awal".to_string(),
                unit_price: price.to_string(),
            },
        }
    }

    #[test]
    fn blank_product_name_fails_validation() {
        let form = opening_form("   ", "10", "1000");
        assert!(matches!(
            form.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn blank_required_field_fails_validation() {
        let form = opening_form("Kopi", "", "1000");
        assert!(form.validate().is_err());
    }

    #[test]
    fn unparseable_numbers_count_as_zero() {
        let form = opening_form("Kopi", "abc", "10x0");
        match form.validate().unwrap() {
            HppInput::Opening(input) => {
                assert_eq!(input.quantity, 0);
                assert_eq!(input.unit_price, Decimal::ZERO);
            }
            other => panic!("expected opening input, got {other:?}"),
        }
    }

    #[test]
    fn purchase_requires_every_field_present() {
        let form = HppForm {
            product_name: "Kopi".to_string(),
            entry: HppEntryForm::Purchase {
                quantity: "5".to_string(),
                description: "restock".to_string(),
                unit_price: "1200".to_string(),
                discount: "0".to_string(),
                return_quantity: "0".to_string(),
                shipping_cost: "".to_string(),
            },
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn valid_purchase_parses_all_fields() {
        let form = HppForm {
            product_name: " Kopi ".to_string(),
            entry: HppEntryForm::Purchase {
                quantity: "400".to_string(),
                description: "restock".to_string(),
                unit_price: "6000".to_string(),
                discount: "200000".to_string(),
                return_quantity: "50".to_string(),
                shipping_cost: "300000".to_string(),
            },
        };
        match form.validate().unwrap() {
            HppInput::Purchase(input) => {
                assert_eq!(input.product.as_str(), "Kopi");
                assert_eq!(input.line.net_total(), dec!(2200000));
            }
            other => panic!("expected purchase input, got {other:?}"),
        }
    }

    #[test]
    fn revenue_business_validates_and_parses() {
        let form = RevenueForm::Business {
            product_name: "Kopi".to_string(),
            quantity: "12".to_string(),
            selling_price: "15000".to_string(),
        };
        match form.validate().unwrap() {
            RevenueInput::Business {
                quantity,
                selling_price,
                ..
            } => {
                assert_eq!(quantity, 12);
                assert_eq!(selling_price, dec!(15000));
            }
            other => panic!("expected business revenue, got {other:?}"),
        }
    }

    #[test]
    fn expense_blank_total_fails() {
        let form = ExpenseForm {
            category: ExpenseCategory::Business,
            name: "Sewa".to_string(),
            total: "  ".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
