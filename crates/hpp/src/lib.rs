//! `kasbuku-hpp` — HPP (harga pokok penjualan / cost of goods sold).
//!
//! Three calculators:
//! - [`stock`]: the running per-product stock ledger behind the HPP entry
//!   page, with weighted-average ending-inventory valuation.
//! - [`period`]: the period close calculation (opening + purchases −
//!   ending) used by the final report.
//! - [`manufacture`]: the manufacturing variant (raw materials, labor,
//!   overhead, WIP, finished goods).

pub mod manufacture;
pub mod period;
pub mod stock;

pub use manufacture::{ManufactureCogs, ManufactureInputs, manufacture_cogs};
pub use period::{OpeningStock, PeriodCogs, PeriodEntries, period_cogs};
pub use stock::{EndingStatus, EndingValuation, ProductStock, PurchaseLine, StockLedger};
