//! Manufacturing COGS.
//!
//! Cost flow: raw materials used → total production cost → adjust through
//! work-in-process → adjust through finished goods. All figures are
//! monetary values for the period; `units_sold` comes from the revenue
//! records and is supplied by the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Period inputs for the manufacturing COGS calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufactureInputs {
    pub raw_opening: Decimal,
    pub raw_purchases: Decimal,
    pub raw_ending: Decimal,
    pub direct_labor: Decimal,
    pub overhead: Decimal,
    pub wip_opening: Decimal,
    pub wip_ending: Decimal,
    pub finished_opening: Decimal,
    pub finished_ending: Decimal,
    /// Units sold over the period (from business revenue entries).
    pub units_sold: i64,
}

/// Manufacturing COGS breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufactureCogs {
    /// Raw materials used: opening + purchases − ending.
    pub materials_used: Decimal,
    /// Materials used + direct labor + overhead.
    pub production_cost: Decimal,
    /// Production cost + WIP opening − WIP ending.
    pub cost_after_wip: Decimal,
    /// Finished-goods opening + cost after WIP − finished-goods ending.
    pub cogs: Decimal,
    /// COGS per unit sold; zero when nothing was sold.
    pub cogs_per_unit: Decimal,
}

/// Compute the manufacturing COGS breakdown.
pub fn manufacture_cogs(inputs: &ManufactureInputs) -> ManufactureCogs {
    let materials_used = inputs.raw_opening + inputs.raw_purchases - inputs.raw_ending;
    let production_cost = materials_used + inputs.direct_labor + inputs.overhead;
    let cost_after_wip = production_cost + inputs.wip_opening - inputs.wip_ending;
    let cogs = inputs.finished_opening + cost_after_wip - inputs.finished_ending;

    let cogs_per_unit = if inputs.units_sold > 0 {
        cogs / Decimal::from(inputs.units_sold)
    } else {
        Decimal::ZERO
    };

    ManufactureCogs {
        materials_used,
        production_cost,
        cost_after_wip,
        cogs,
        cogs_per_unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn full_cost_flow() {
        let inputs = ManufactureInputs {
            raw_opening: dec!(1000000),
            raw_purchases: dec!(4000000),
            raw_ending: dec!(500000),
            direct_labor: dec!(2000000),
            overhead: dec!(1500000),
            wip_opening: dec!(300000),
            wip_ending: dec!(800000),
            finished_opening: dec!(600000),
            finished_ending: dec!(400000),
            units_sold: 100,
        };

        let result = manufacture_cogs(&inputs);
        assert_eq!(result.materials_used, dec!(4500000));
        assert_eq!(result.production_cost, dec!(8000000));
        assert_eq!(result.cost_after_wip, dec!(7500000));
        assert_eq!(result.cogs, dec!(7700000));
        assert_eq!(result.cogs_per_unit, dec!(77000));
    }

    #[test]
    fn zero_units_sold_gives_zero_per_unit() {
        let inputs = ManufactureInputs {
            raw_purchases: dec!(100000),
            ..ManufactureInputs::default()
        };

        let result = manufacture_cogs(&inputs);
        assert_eq!(result.cogs, dec!(100000));
        assert_eq!(result.cogs_per_unit, Decimal::ZERO);
    }

    #[test]
    fn defaults_are_all_zero() {
        let result = manufacture_cogs(&ManufactureInputs::default());
        assert_eq!(result.cogs, Decimal::ZERO);
        assert_eq!(result.production_cost, Decimal::ZERO);
    }
}
