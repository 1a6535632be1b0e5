//! Stock-level classification.

use serde::{Deserialize, Serialize};

/// Derived restocking urgency for a (quantity, minimum level) pair.
///
/// Never persisted: the same two numbers must render the same badge
/// everywhere, so status is recomputed from source values at every use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    MediumStock,
    InStock,
}

impl StockStatus {
    /// Kebab-case label as used in badges and wire payloads.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::MediumStock => "medium-stock",
            StockStatus::InStock => "in-stock",
        }
    }

    /// Badge color for this status.
    pub fn color(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "red",
            StockStatus::LowStock => "orange",
            StockStatus::MediumStock => "yellow",
            StockStatus::InStock => "green",
        }
    }

    /// Restocking urgency rank; higher is more urgent.
    pub fn urgency(&self) -> u8 {
        match self {
            StockStatus::OutOfStock => 3,
            StockStatus::LowStock => 2,
            StockStatus::MediumStock => 1,
            StockStatus::InStock => 0,
        }
    }
}

/// Classify on-hand quantity against the product's minimum stock level.
///
/// The zero-quantity check comes first and wins regardless of the minimum,
/// including a minimum of zero. A zero minimum otherwise disables the low
/// and medium bands entirely: any positive quantity is in stock. The order
/// of checks is contract.
pub fn classify(quantity: i64, minimum_level: i64) -> StockStatus {
    if quantity == 0 {
        return StockStatus::OutOfStock;
    }
    if quantity <= minimum_level {
        return StockStatus::LowStock;
    }
    if quantity <= minimum_level * 2 {
        return StockStatus::MediumStock;
    }
    StockStatus::InStock
}

/// How urgent a low-stock row is on the restocking report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Critical,
    Warning,
}

/// A row at or below a quarter of its minimum level is critical; everything
/// else on the low-stock report, including rows with no minimum to ratio
/// against, is a warning.
pub fn criticality(quantity_on_hand: i64, minimum_level: i64) -> Criticality {
    if minimum_level > 0 && quantity_on_hand * 4 <= minimum_level {
        Criticality::Critical
    } else {
        Criticality::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_out_of_stock_for_any_minimum() {
        for minimum in [0, 1, 5, 100] {
            assert_eq!(classify(0, minimum), StockStatus::OutOfStock);
        }
    }

    #[test]
    fn zero_minimum_disables_low_and_medium_bands() {
        for quantity in [1, 2, 50, 10_000] {
            assert_eq!(classify(quantity, 0), StockStatus::InStock);
        }
        assert_eq!(classify(0, 0), StockStatus::OutOfStock);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        let minimum = 10;
        assert_eq!(classify(minimum, minimum), StockStatus::LowStock);
        assert_eq!(classify(minimum + 1, minimum), StockStatus::MediumStock);
        assert_eq!(classify(2 * minimum, minimum), StockStatus::MediumStock);
        assert_eq!(classify(2 * minimum + 1, minimum), StockStatus::InStock);
    }

    #[test]
    fn minimum_of_one_skips_the_medium_band_above_two() {
        assert_eq!(classify(1, 1), StockStatus::LowStock);
        assert_eq!(classify(2, 1), StockStatus::MediumStock);
        assert_eq!(classify(3, 1), StockStatus::InStock);
    }

    #[test]
    fn labels_and_colors_are_fixed() {
        assert_eq!(StockStatus::OutOfStock.label(), "out-of-stock");
        assert_eq!(StockStatus::OutOfStock.color(), "red");
        assert_eq!(StockStatus::LowStock.color(), "orange");
        assert_eq!(StockStatus::MediumStock.color(), "yellow");
        assert_eq!(StockStatus::InStock.color(), "green");
    }

    #[test]
    fn status_serializes_as_kebab_case() {
        let json = serde_json::to_string(&StockStatus::LowStock).unwrap();
        assert_eq!(json, "\"low-stock\"");
    }

    #[test]
    fn quarter_of_minimum_or_less_is_critical() {
        assert_eq!(criticality(2, 8), Criticality::Critical);
        assert_eq!(criticality(3, 8), Criticality::Warning);
        assert_eq!(criticality(0, 4), Criticality::Critical);
        // No minimum to ratio against.
        assert_eq!(criticality(0, 0), Criticality::Warning);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: for a fixed minimum, urgency never increases as
            /// quantity grows.
            #[test]
            fn urgency_is_monotone_in_quantity(
                quantity in 0i64..10_000,
                minimum in 0i64..1_000
            ) {
                let here = classify(quantity, minimum).urgency();
                let next = classify(quantity + 1, minimum).urgency();
                prop_assert!(next <= here);
            }

            /// Property: classification is total and deterministic over the
            /// valid domain.
            #[test]
            fn classification_is_deterministic(
                quantity in 0i64..10_000,
                minimum in 0i64..1_000
            ) {
                prop_assert_eq!(classify(quantity, minimum), classify(quantity, minimum));
            }

            /// Property: only a zero quantity ever classifies as out of
            /// stock.
            #[test]
            fn positive_quantity_is_never_out_of_stock(
                quantity in 1i64..10_000,
                minimum in 0i64..1_000
            ) {
                prop_assert_ne!(classify(quantity, minimum), StockStatus::OutOfStock);
            }
        }
    }
}
