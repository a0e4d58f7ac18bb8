//! Page state objects: one per ledger screen, alive for one session.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use kasbuku_books::{ExpenseEntry, RevenueEntry, Sheet};
use kasbuku_core::{ProductName, RowId};
use kasbuku_hpp::{
    EndingValuation, OpeningStock, PeriodEntries, PurchaseLine, StockLedger,
};

use crate::alert::Alert;
use crate::forms::{ExpenseForm, HppForm, HppInput, RevenueForm, RevenueInput};

/// Detail for a recorded opening-inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningRow {
    pub product: ProductName,
    pub quantity: i64,
    pub description: String,
    pub unit_price: Decimal,
}

/// Detail for a recorded purchase row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRow {
    pub product: ProductName,
    pub description: String,
    pub line: PurchaseLine,
}

/// Detail for a recorded ending-inventory row, status included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingRow {
    pub product: ProductName,
    pub quantity: i64,
    pub description: String,
    pub valuation: EndingValuation,
}

/// The three row sections of the HPP page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HppSection {
    Opening,
    Purchase,
    Ending,
}

/// State of the HPP entry page for one session.
///
/// Owns the stock ledger and the three sheets; dropping the page drops
/// the accumulator map with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HppPage {
    ledger: StockLedger,
    opening: Sheet<OpeningRow>,
    purchases: Sheet<PurchaseRow>,
    ending: Sheet<EndingRow>,
}

impl HppPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one form submission.
    ///
    /// Invalid input discards the submission without touching any state.
    /// A stock inconsistency on an ending entry is not a failure: the row
    /// is recorded with its classified status and a zeroed valuation so
    /// the user has a visible trail to correct.
    pub fn submit(&mut self, form: &HppForm) -> Alert {
        let input = match form.validate() {
            Ok(input) => input,
            Err(err) => {
                debug!(error = %err, "hpp submission rejected");
                return Alert::from(err);
            }
        };

        match input {
            HppInput::Opening(input) => {
                let total = match self.ledger.record_opening(
                    &input.product,
                    input.quantity,
                    input.unit_price,
                ) {
                    Ok(total) => total,
                    Err(err) => {
                        debug!(error = %err, product = %input.product, "opening entry rejected");
                        return Alert::from(err);
                    }
                };
                info!(product = %input.product, quantity = input.quantity, %total, "opening inventory recorded");
                self.opening.push(
                    total,
                    OpeningRow {
                        product: input.product,
                        quantity: input.quantity,
                        description: input.description,
                        unit_price: input.unit_price,
                    },
                );
            }
            HppInput::Purchase(input) => {
                let net_total = self.ledger.record_purchase(&input.product, &input.line);
                info!(product = %input.product, quantity = input.line.quantity, %net_total, "purchase recorded");
                self.purchases.push(
                    net_total,
                    PurchaseRow {
                        product: input.product,
                        description: input.description,
                        line: input.line,
                    },
                );
            }
            HppInput::Ending(input) => {
                let valuation = self.ledger.value_ending(&input.product, input.quantity);
                if valuation.status.is_error() || valuation.status.is_warning() {
                    warn!(
                        product = %input.product,
                        quantity = input.quantity,
                        status = %valuation.status,
                        "ending inventory flagged"
                    );
                } else {
                    info!(product = %input.product, quantity = input.quantity, "ending inventory recorded");
                }
                self.ending.push(
                    valuation.valued_amount,
                    EndingRow {
                        product: input.product,
                        quantity: input.quantity,
                        description: input.description,
                        valuation,
                    },
                );
            }
        }

        Alert::Success
    }

    /// Remove a row from a section. Returns whether a row was removed.
    ///
    /// Removal only affects the visible sheet and its grand total; the
    /// stock accumulators keep what was recorded.
    pub fn remove_row(&mut self, section: HppSection, id: RowId) -> bool {
        let removed = match section {
            HppSection::Opening => self.opening.remove(id).is_some(),
            HppSection::Purchase => self.purchases.remove(id).is_some(),
            HppSection::Ending => self.ending.remove(id).is_some(),
        };
        if removed {
            debug!(?section, %id, "row removed");
        }
        removed
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    pub fn opening_rows(&self) -> &Sheet<OpeningRow> {
        &self.opening
    }

    pub fn purchase_rows(&self) -> &Sheet<PurchaseRow> {
        &self.purchases
    }

    pub fn ending_rows(&self) -> &Sheet<EndingRow> {
        &self.ending
    }

    pub fn opening_total(&self) -> Decimal {
        self.opening.grand_total()
    }

    pub fn purchase_total(&self) -> Decimal {
        self.purchases.grand_total()
    }

    pub fn ending_total(&self) -> Decimal {
        self.ending.grand_total()
    }

    /// Group the recorded rows per product for the period-close
    /// calculation, in order of first appearance.
    ///
    /// Multiple opening rows for one product merge additively (the
    /// merged unit price is the weighted average); for ending rows the
    /// most recent count wins.
    pub fn period_entries(&self) -> Vec<(ProductName, PeriodEntries)> {
        fn ensure_entry(
            order: &mut Vec<ProductName>,
            entries: &mut HashMap<ProductName, PeriodEntries>,
            product: &ProductName,
        ) {
            if !entries.contains_key(product) {
                order.push(product.clone());
                entries.insert(product.clone(), PeriodEntries::default());
            }
        }

        let mut order: Vec<ProductName> = Vec::new();
        let mut entries: HashMap<ProductName, PeriodEntries> = HashMap::new();

        for row in self.opening.rows() {
            ensure_entry(&mut order, &mut entries, &row.detail.product);
            let entry = entries.get_mut(&row.detail.product).expect("just inserted");
            let opening = entry.opening.get_or_insert(OpeningStock::default());
            let merged_value = Decimal::from(opening.quantity) * opening.unit_price
                + Decimal::from(row.detail.quantity) * row.detail.unit_price;
            opening.quantity += row.detail.quantity;
            opening.unit_price = if opening.quantity > 0 {
                merged_value / Decimal::from(opening.quantity)
            } else {
                Decimal::ZERO
            };
        }

        for row in self.purchases.rows() {
            ensure_entry(&mut order, &mut entries, &row.detail.product);
            let entry = entries.get_mut(&row.detail.product).expect("just inserted");
            entry.purchases.push(row.detail.line);
        }

        for row in self.ending.rows() {
            ensure_entry(&mut order, &mut entries, &row.detail.product);
            let entry = entries.get_mut(&row.detail.product).expect("just inserted");
            entry.ending_quantity = Some(row.detail.quantity);
        }

        order
            .into_iter()
            .map(|product| {
                let entry = entries.remove(&product).expect("ordered key");
                (product, entry)
            })
            .collect()
    }
}

/// State of the revenue page for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePage {
    sheet: Sheet<RevenueEntry>,
}

impl RevenuePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, form: &RevenueForm) -> Alert {
        let entry = match form.validate() {
            Ok(RevenueInput::Business {
                product,
                quantity,
                selling_price,
            }) => RevenueEntry::business(&product, quantity, selling_price),
            Ok(RevenueInput::Other { description, total }) => {
                RevenueEntry::other(description, total)
            }
            Err(err) => {
                debug!(error = %err, "revenue submission rejected");
                return Alert::from(err);
            }
        };

        info!(name = %entry.name, total = %entry.total, "revenue recorded");
        self.sheet.push(entry.total, entry);
        Alert::Success
    }

    pub fn remove_row(&mut self, id: RowId) -> bool {
        self.sheet.remove(id).is_some()
    }

    pub fn rows(&self) -> &Sheet<RevenueEntry> {
        &self.sheet
    }

    pub fn total(&self) -> Decimal {
        self.sheet.grand_total()
    }

    pub fn entries(&self) -> Vec<RevenueEntry> {
        self.sheet.rows().iter().map(|row| row.detail.clone()).collect()
    }
}

/// State of the expense page for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpensePage {
    sheet: Sheet<ExpenseEntry>,
}

impl ExpensePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, form: &ExpenseForm) -> Alert {
        let input = match form.validate() {
            Ok(input) => input,
            Err(err) => {
                debug!(error = %err, "expense submission rejected");
                return Alert::from(err);
            }
        };

        let entry = ExpenseEntry::new(input.category, input.name, input.total);
        info!(name = %entry.name, total = %entry.total, "expense recorded");
        self.sheet.push(entry.total, entry);
        Alert::Success
    }

    pub fn remove_row(&mut self, id: RowId) -> bool {
        self.sheet.remove(id).is_some()
    }

    pub fn rows(&self) -> &Sheet<ExpenseEntry> {
        &self.sheet
    }

    pub fn total(&self) -> Decimal {
        self.sheet.grand_total()
    }

    pub fn entries(&self) -> Vec<ExpenseEntry> {
        self.sheet.rows().iter().map(|row| row.detail.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::HppEntryForm;
    use kasbuku_books::ExpenseCategory;
    use kasbuku_hpp::EndingStatus;
    use rust_decimal_macros::dec;

    fn opening(product: &str, quantity: &str, price: &str) -> HppForm {
        HppForm {
            product_name: product.to_string(),
            entry: HppEntryForm::Opening {
                quantity: quantity.to_string(),
                description: "stok awal".to_string(),
                unit_price: price.to_string(),
            },
        }
    }

    fn purchase(product: &str, quantity: &str, price: &str) -> HppForm {
        HppForm {
            product_name: product.to_string(),
            entry: HppEntryForm::Purchase {
                quantity: quantity.to_string(),
                description: "restock".to_string(),
                unit_price: price.to_string(),
                discount: "0".to_string(),
                return_quantity: "0".to_string(),
                shipping_cost: "0".to_string(),
            },
        }
    }

    fn ending(product: &str, quantity: &str) -> HppForm {
        HppForm {
            product_name: product.to_string(),
            entry: HppEntryForm::Ending {
                quantity: quantity.to_string(),
                description: "stok akhir".to_string(),
            },
        }
    }

    #[test]
    fn invalid_submission_mutates_nothing() {
        let mut page = HppPage::new();
        let alert = page.submit(&opening("", "10", "1000"));
        assert!(!alert.is_success());
        assert!(page.ledger().is_empty());
        assert!(page.opening_rows().is_empty());
    }

    #[test]
    fn opening_submission_records_row_and_total() {
        let mut page = HppPage::new();
        assert!(page.submit(&opening("Kopi", "10", "1000")).is_success());
        assert_eq!(page.opening_total(), dec!(10000));
        assert_eq!(page.opening_rows().len(), 1);
    }

    #[test]
    fn flagged_ending_is_recorded_with_zero_valuation() {
        let mut page = HppPage::new();
        assert!(page.submit(&ending("Gula", "5")).is_success());

        let row = &page.ending_rows().rows()[0];
        assert_eq!(row.detail.valuation.status, EndingStatus::NoPriorStock);
        assert_eq!(row.total, Decimal::ZERO);
        assert_eq!(page.ending_total(), Decimal::ZERO);
    }

    #[test]
    fn removing_a_row_does_not_touch_the_ledger() {
        let mut page = HppPage::new();
        page.submit(&opening("Kopi", "10", "1000"));
        let id = page.opening_rows().rows()[0].id;

        assert!(page.remove_row(HppSection::Opening, id));
        assert_eq!(page.opening_total(), Decimal::ZERO);
        // Accumulator still remembers the recorded stock.
        let name = ProductName::new("Kopi").unwrap();
        assert_eq!(page.ledger().product(&name).unwrap().opening_quantity, 10);
    }

    #[test]
    fn remove_is_routed_by_section() {
        let mut page = HppPage::new();
        page.submit(&opening("Kopi", "10", "1000"));
        let id = page.opening_rows().rows()[0].id;
        assert!(!page.remove_row(HppSection::Purchase, id));
        assert!(page.remove_row(HppSection::Opening, id));
    }

    #[test]
    fn period_entries_group_rows_per_product() {
        let mut page = HppPage::new();
        page.submit(&opening("a", "100", "5000"));
        page.submit(&purchase("a", "400", "6000"));
        page.submit(&purchase("b", "20", "500"));
        page.submit(&ending("a", "400"));

        let grouped = page.period_entries();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0.as_str(), "a");
        assert_eq!(grouped[0].1.opening.unwrap().quantity, 100);
        assert_eq!(grouped[0].1.purchases.len(), 1);
        assert_eq!(grouped[0].1.ending_quantity, Some(400));
        assert_eq!(grouped[1].0.as_str(), "b");
        assert!(grouped[1].1.opening.is_none());
        assert_eq!(grouped[1].1.ending_quantity, None);
    }

    #[test]
    fn multiple_opening_rows_merge_at_weighted_average() {
        let mut page = HppPage::new();
        page.submit(&opening("a", "10", "1000"));
        page.submit(&opening("a", "30", "2000"));

        let grouped = page.period_entries();
        let merged = grouped[0].1.opening.unwrap();
        assert_eq!(merged.quantity, 40);
        assert_eq!(merged.unit_price, dec!(1750));
    }

    #[test]
    fn revenue_page_records_and_totals() {
        let mut page = RevenuePage::new();
        let alert = page.submit(&RevenueForm::Business {
            product_name: "Kopi".to_string(),
            quantity: "12".to_string(),
            selling_price: "15000".to_string(),
        });
        assert!(alert.is_success());
        page.submit(&RevenueForm::Other {
            description: "Bunga bank".to_string(),
            total: "50000".to_string(),
        });
        assert_eq!(page.total(), dec!(230000));
    }

    #[test]
    fn expense_page_rejects_blank_name() {
        let mut page = ExpensePage::new();
        let alert = page.submit(&ExpenseForm {
            category: ExpenseCategory::Business,
            name: " ".to_string(),
            total: "1000".to_string(),
        });
        assert!(!alert.is_success());
        assert!(page.rows().is_empty());
    }
}
