//! Property-based tests for the low-stock determination and coercion rules.
//!
//! Uses proptest to verify the invariants that hold for all inputs, not
//! just the handful of cases the unit tests pin down.

use proptest::prelude::*;
use stockwatch_core::{
    coerce_threshold, is_low_stock, LowStockEntry, LowStockReport, Part, PartId,
    MAX_VISIBLE_ENTRIES,
};

/// Non-negative stock quantities within a realistic range
fn stock_strategy() -> impl Strategy<Value = f64> {
    0.0..1_000_000.0f64
}

fn part(id: i64, available: f64, minimum: f64) -> Part {
    Part {
        id: PartId(id),
        name: format!("Part {id}"),
        ipn: None,
        available_stock: available,
        minimum_stock: minimum,
    }
}

proptest! {
    /// Low stock holds exactly when available is strictly below the threshold.
    #[test]
    fn low_stock_iff_strictly_below(available in stock_strategy(), threshold in stock_strategy()) {
        prop_assert_eq!(is_low_stock(available, threshold), available < threshold);
    }

    /// Equal stock and threshold is never low.
    #[test]
    fn equal_values_are_never_low(value in stock_strategy()) {
        prop_assert!(!is_low_stock(value, value));
    }

    /// Coerced input is always a non-negative finite number.
    #[test]
    fn coercion_never_produces_invalid_threshold(raw in ".{0,32}") {
        let value = coerce_threshold(&raw);
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    /// Numeric non-negative input survives coercion unchanged.
    #[test]
    fn coercion_preserves_valid_input(value in stock_strategy()) {
        let raw = format!("{value}");
        prop_assert_eq!(coerce_threshold(&raw), value);
    }

    /// The progress ratio stays inside [0, 100] for any data, including
    /// stock far above the threshold.
    #[test]
    fn stock_percent_always_clamped(available in stock_strategy(), minimum in stock_strategy()) {
        let entry = LowStockEntry::from_part(&part(1, available, minimum));
        let percent = entry.stock_percent();
        prop_assert!((0.0..=100.0).contains(&percent));
    }

    /// The report never shows more than the display cap, and the overflow
    /// count always accounts for the rest of the qualifying set.
    #[test]
    fn report_respects_display_cap(stocks in prop::collection::vec((stock_strategy(), stock_strategy()), 0..40)) {
        let candidates: Vec<Part> = stocks
            .iter()
            .enumerate()
            .map(|(i, (available, minimum))| part(i as i64, *available, *minimum))
            .collect();

        let qualifying = candidates
            .iter()
            .filter(|p| p.available_stock < p.minimum_stock)
            .count();

        let report = LowStockReport::from_candidates(&candidates);
        prop_assert!(report.visible.len() <= MAX_VISIBLE_ENTRIES);
        prop_assert_eq!(report.total(), qualifying);
    }
}
