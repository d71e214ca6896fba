//! Tests for the tariff delta, impact and pricing calculators.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, PricingError};
    use crate::products::Product;
    use crate::tariffs::{
        compute_aggregate_impact, compute_monthly_impact, compute_tariff_delta, landed_cost,
        resolve_pricing, PricingMode,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn product(cost: Decimal, units: u32) -> Product {
        Product {
            id: format!("p-{cost}-{units}"),
            name: "Item".to_string(),
            hs_code: None,
            country_of_origin: "Vietnam".to_string(),
            cost_per_unit: cost,
            units_per_month: units,
        }
    }

    // ==================== Tariff delta ====================

    #[test]
    fn test_mug_tariff_increase() {
        let delta = compute_tariff_delta(dec!(4.00), dec!(10), dec!(25)).unwrap();
        assert_eq!(delta.current_cost, dec!(0.40));
        assert_eq!(delta.new_cost, dec!(1.00));
        assert_eq!(delta.cost_increase, dec!(0.60));
        assert_eq!(delta.percent_increase, dec!(150.0));
    }

    #[test]
    fn test_zero_base_value_is_all_zero() {
        let delta = compute_tariff_delta(Decimal::ZERO, dec!(10), dec!(25)).unwrap();
        assert_eq!(delta.current_cost, Decimal::ZERO);
        assert_eq!(delta.new_cost, Decimal::ZERO);
        assert_eq!(delta.cost_increase, Decimal::ZERO);
        assert_eq!(delta.percent_increase, Decimal::ZERO);
    }

    #[test]
    fn test_zero_current_rate_reports_zero_percent() {
        let delta = compute_tariff_delta(dec!(10), Decimal::ZERO, dec!(20)).unwrap();
        assert_eq!(delta.cost_increase, dec!(2));
        assert_eq!(delta.percent_increase, Decimal::ZERO);
    }

    #[test]
    fn test_rate_decrease_is_negative() {
        let delta = compute_tariff_delta(dec!(10), dec!(25), dec!(10)).unwrap();
        assert_eq!(delta.cost_increase, dec!(-1.5));
        assert_eq!(delta.percent_increase, dec!(-60));
    }

    #[test]
    fn test_rates_outside_slider_range_still_compute() {
        let delta = compute_tariff_delta(dec!(100), dec!(-5), dec!(80)).unwrap();
        assert_eq!(delta.current_cost, dec!(-5));
        assert_eq!(delta.new_cost, dec!(80));
        // Negative current cost is not a positive base, so the percentage is guarded
        assert_eq!(delta.percent_increase, Decimal::ZERO);
    }

    // ==================== Impact ====================

    #[test]
    fn test_monthly_impact() {
        let impact = compute_monthly_impact(&product(dec!(4), 500), dec!(15)).unwrap();
        assert_eq!(impact, dec!(300));
    }

    #[test]
    fn test_aggregate_impact_two_products() {
        let products = vec![product(dec!(4.00), 500), product(dec!(10.00), 100)];
        let impact = compute_aggregate_impact(&products, dec!(15)).unwrap();
        assert_eq!(impact.exact, dec!(450));
        assert_eq!(impact.rounded, dec!(450));
    }

    #[test]
    fn test_aggregate_impact_keeps_exact_value() {
        let products = vec![product(dec!(3.33), 3)];
        let impact = compute_aggregate_impact(&products, dec!(15)).unwrap();
        assert_eq!(impact.exact, dec!(1.4985));
        assert_eq!(impact.rounded, dec!(1));
    }

    #[test]
    fn test_aggregate_impact_empty_catalog() {
        let impact = compute_aggregate_impact(&[], dec!(15)).unwrap();
        assert_eq!(impact.exact, Decimal::ZERO);
        assert_eq!(impact.rounded, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_overflow_is_an_error() {
        let products = vec![product(dec!(1000000000000), 4_000_000_000), product(Decimal::MAX, 1)];
        let err = compute_aggregate_impact(&products, dec!(15)).unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }

    #[test]
    fn test_tariff_delta_overflow_is_an_error() {
        let err = compute_tariff_delta(Decimal::MAX, dec!(10), dec!(250)).unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }

    // ==================== Pricing ====================

    #[test]
    fn test_landed_cost() {
        assert_eq!(landed_cost(dec!(4), dec!(25)).unwrap(), dec!(5));
        assert_eq!(landed_cost(dec!(4), Decimal::ZERO).unwrap(), dec!(4));
    }

    #[test]
    fn test_margin_mode_price() {
        let result = resolve_pricing(dec!(4), dec!(25), PricingMode::Margin(dec!(50)), None).unwrap();
        assert_eq!(result.landed_cost, dec!(5));
        assert_eq!(result.retail_price, dec!(10));
        assert_eq!(result.margin_percent, dec!(50));
        assert_eq!(result.break_even_price, dec!(5));
        assert_eq!(result.additional_monthly_cost, None);
    }

    #[test]
    fn test_margin_of_100_is_rejected() {
        let err = resolve_pricing(dec!(100), dec!(10), PricingMode::Margin(dec!(100)), None).unwrap_err();
        assert!(matches!(
            err,
            Error::Pricing(PricingError::InvalidMargin { target_margin }) if target_margin == dec!(100)
        ));
        assert!(resolve_pricing(dec!(100), dec!(10), PricingMode::Margin(dec!(140)), None).is_err());
    }

    #[test]
    fn test_margin_just_below_100_reports_overflow() {
        let target = dec!(99.99999999999999999999999999);
        let err = resolve_pricing(dec!(10), dec!(15), PricingMode::Margin(target), None).unwrap_err();
        assert!(matches!(
            err,
            Error::Pricing(PricingError::PriceOverflow { target_margin }) if target_margin == target
        ));
    }

    #[test]
    fn test_retail_mode_margin() {
        let result = resolve_pricing(dec!(4), dec!(25), PricingMode::Retail(dec!(10)), None).unwrap();
        assert_eq!(result.retail_price, dec!(10));
        assert_eq!(result.margin_percent, dec!(50));
    }

    #[test]
    fn test_retail_mode_zero_price_guards_division() {
        let result = resolve_pricing(dec!(4), dec!(25), PricingMode::Retail(Decimal::ZERO), None).unwrap();
        assert_eq!(result.margin_percent, Decimal::ZERO);
    }

    #[test]
    fn test_retail_below_landed_cost_is_negative_margin() {
        let result = resolve_pricing(dec!(4), dec!(25), PricingMode::Retail(dec!(4)), None).unwrap();
        assert_eq!(result.margin_percent, dec!(-25));
    }

    #[test]
    fn test_additional_monthly_cost_with_volume() {
        let result =
            resolve_pricing(dec!(4), dec!(15), PricingMode::Retail(dec!(8)), Some(500)).unwrap();
        assert_eq!(result.additional_monthly_cost, Some(dec!(300)));
    }

    #[test]
    fn test_margin_round_trip() {
        let by_margin =
            resolve_pricing(dec!(7.35), dec!(17.5), PricingMode::Margin(dec!(37)), None).unwrap();
        let by_retail = resolve_pricing(
            dec!(7.35),
            dec!(17.5),
            PricingMode::Retail(by_margin.retail_price),
            None,
        )
        .unwrap();
        let diff = (by_retail.margin_percent - dec!(37)).abs();
        assert!(diff < dec!(0.000000001), "margin drifted by {diff}");
    }
}
