//! Property-based tests for the tariff financial model.
//!
//! These verify that the calculator invariants hold across generated inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tariffwatch_core::content::{filter_relevant, MitigationStrategy, StrategyPriority};
use tariffwatch_core::errors::{Error, PricingError};
use tariffwatch_core::{
    classify_risk, compute_aggregate_impact, compute_monthly_impact, compute_tariff_delta,
    resolve_pricing, PricingMode, Product, RiskLevel,
};

// =============================================================================
// Generators
// =============================================================================

/// Non-negative money amount with cent precision, up to 100k.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Tariff rate with half-point steps, including values outside the slider range.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (-40i64..=400).prop_map(|halves| Decimal::new(halves * 5, 1))
}

/// Target margin strictly below 100%.
fn arb_margin() -> impl Strategy<Value = Decimal> {
    (-5000i64..9990).prop_map(|bp| Decimal::new(bp, 2))
}

fn arb_product() -> impl Strategy<Value = Product> {
    (
        "[a-z]{3,12}",
        prop_oneof![Just("China"), Just("china"), Just("Colombia"), Just("Italy")],
        arb_amount(),
        0u32..5_000,
    )
        .prop_map(|(name, origin, cost, units)| Product {
            id: name.clone(),
            name,
            hs_code: None,
            country_of_origin: origin.to_string(),
            cost_per_unit: cost,
            units_per_month: units,
        })
}

fn arb_strategy() -> impl Strategy<Value = MitigationStrategy> {
    (
        "[a-z]{4,8}",
        proptest::collection::vec("[A-Z][a-z]{3,8}", 0..3),
        proptest::collection::vec("[a-z]{2,5}", 0..3),
    )
        .prop_map(|(id, industries, keywords)| MitigationStrategy {
            id: id.clone(),
            title: id,
            description: String::new(),
            priority: StrategyPriority::Medium,
            industries,
            related_keywords: keywords,
        })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A zero base value costs nothing at any rates and never yields a
    /// non-zero percentage.
    #[test]
    fn prop_zero_base_is_all_zero(current in arb_rate(), new in arb_rate()) {
        let delta = compute_tariff_delta(Decimal::ZERO, current, new).unwrap();
        prop_assert_eq!(delta.current_cost, Decimal::ZERO);
        prop_assert_eq!(delta.new_cost, Decimal::ZERO);
        prop_assert_eq!(delta.cost_increase, Decimal::ZERO);
        prop_assert_eq!(delta.percent_increase, Decimal::ZERO);
    }

    /// The cost increase is linear in the rate difference.
    #[test]
    fn prop_cost_increase_is_linear(value in arb_amount(), current in arb_rate(), new in arb_rate()) {
        let delta = compute_tariff_delta(value, current, new).unwrap();
        prop_assert_eq!(delta.cost_increase, value * (new - current) / dec!(100));
    }

    /// Feeding the price from margin mode back into retail mode reproduces the margin.
    #[test]
    fn prop_margin_round_trip(
        wholesale in (1i64..10_000_000).prop_map(|c| Decimal::new(c, 2)),
        tariff in arb_rate(),
        margin in arb_margin(),
    ) {
        let priced = resolve_pricing(wholesale, tariff, PricingMode::Margin(margin), None).unwrap();
        let back = resolve_pricing(wholesale, tariff, PricingMode::Retail(priced.retail_price), None).unwrap();
        let drift = (back.margin_percent - margin).abs();
        prop_assert!(drift < dec!(0.0000001), "margin drifted by {}", drift);
        prop_assert_eq!(priced.break_even_price, priced.landed_cost);
    }

    /// Target margins of 100% or more are always rejected.
    #[test]
    fn prop_margin_at_or_above_100_rejected(
        wholesale in arb_amount(),
        tariff in arb_rate(),
        margin in (10_000i64..50_000).prop_map(|bp| Decimal::new(bp, 2)),
    ) {
        let result = resolve_pricing(wholesale, tariff, PricingMode::Margin(margin), None);
        let is_invalid_margin = matches!(result, Err(Error::Pricing(PricingError::InvalidMargin { .. })));
        prop_assert!(is_invalid_margin);
    }

    /// Aggregate impact is the sum of per-product impacts, and the display
    /// value is within half a unit of it.
    #[test]
    fn prop_aggregate_is_sum_of_parts(
        products in proptest::collection::vec(arb_product(), 0..20),
        rate in arb_rate(),
    ) {
        let impact = compute_aggregate_impact(&products, rate).unwrap();
        let expected: Decimal = products
            .iter()
            .map(|p| compute_monthly_impact(p, rate).unwrap())
            .sum();
        prop_assert_eq!(impact.exact, expected);
        prop_assert!((impact.rounded - impact.exact).abs() <= dec!(0.5));
        prop_assert!(impact.rounded.fract().is_zero());
    }

    /// High risk always means a Chinese origin with exposure above 1000.
    #[test]
    fn prop_high_risk_requires_china_and_exposure(product in arb_product()) {
        let risk = classify_risk(&product);
        let exposure = product.cost_per_unit * Decimal::from(product.units_per_month);
        if risk == RiskLevel::High {
            prop_assert!(product.country_of_origin.eq_ignore_ascii_case("china"));
            prop_assert!(exposure > dec!(1000));
        }
        if exposure <= dec!(500) {
            prop_assert_eq!(risk, RiskLevel::Low);
        }
    }

    /// Arbitrarily large values never panic: the model either computes or
    /// reports the overflow.
    #[test]
    fn prop_large_values_never_panic(
        cost in (any::<i64>(), 0u32..28).prop_map(|(m, scale)| Decimal::new(m, scale) * Decimal::from(u32::MAX)),
        units in any::<u32>(),
        rate in (any::<i64>(), 0u32..10).prop_map(|(m, scale)| Decimal::new(m, scale)),
        margin in (any::<i64>(), 0u32..28).prop_map(|(m, scale)| Decimal::new(m, scale)),
    ) {
        let product = Product {
            id: "p".to_string(),
            name: "Item".to_string(),
            hs_code: None,
            country_of_origin: "China".to_string(),
            cost_per_unit: cost,
            units_per_month: units,
        };
        let _ = classify_risk(&product);
        let _ = compute_aggregate_impact(&[product.clone(), product], rate);
        let _ = compute_tariff_delta(cost, rate, margin);
        let _ = resolve_pricing(cost, rate, PricingMode::Margin(margin), Some(units));
        let _ = resolve_pricing(cost, rate, PricingMode::Retail(margin), Some(units));
    }

    /// A blank industry keeps every item in its original order.
    #[test]
    fn prop_blank_industry_passthrough(
        items in proptest::collection::vec(arb_strategy(), 0..10),
        products in proptest::collection::vec(arb_product(), 0..5),
    ) {
        let filtered = filter_relevant(&items, "", &products);
        prop_assert_eq!(filtered, items);
    }

    /// Filtering never reorders: the output is a subsequence of the input.
    #[test]
    fn prop_filter_preserves_order(
        items in proptest::collection::vec(arb_strategy(), 0..10),
        products in proptest::collection::vec(arb_product(), 0..5),
        industry in "[A-Z][a-z]{3,8}",
    ) {
        let filtered = filter_relevant(&items, &industry, &products);
        let mut cursor = items.iter();
        for kept in &filtered {
            prop_assert!(cursor.any(|item| item == kept));
        }
    }
}
