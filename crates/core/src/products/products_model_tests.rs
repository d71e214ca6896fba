//! Tests for product models and form conversion.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::products::{Product, ProductInput};
    use crate::utils::numeric_utils::ParseMode;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn mug_input(cost: &str, units: &str) -> ProductInput {
        ProductInput {
            id: None,
            name: " Ceramic Mug ".to_string(),
            hs_code: Some("6912.00".to_string()),
            country_of_origin: "China".to_string(),
            cost_per_unit: cost.to_string(),
            units_per_month: units.to_string(),
        }
    }

    #[test]
    fn test_into_product_parses_numbers() {
        let product = mug_input("4.00", "500")
            .into_product("p-1".to_string(), ParseMode::Strict)
            .unwrap();
        assert_eq!(product.id, "p-1");
        assert_eq!(product.name, "Ceramic Mug");
        assert_eq!(product.cost_per_unit, dec!(4.00));
        assert_eq!(product.units_per_month, 500);
        assert_eq!(product.monthly_value().unwrap(), dec!(2000));
    }

    #[test]
    fn test_into_product_lenient_zeroes_bad_numbers() {
        let product = mug_input("four dollars", "many")
            .into_product("p-1".to_string(), ParseMode::Lenient)
            .unwrap();
        assert_eq!(product.cost_per_unit, Decimal::ZERO);
        assert_eq!(product.units_per_month, 0);
        assert_eq!(product.monthly_value().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_into_product_lenient_keeps_leading_numbers() {
        let product = mug_input("4.00 USD", "500 units")
            .into_product("p-1".to_string(), ParseMode::Lenient)
            .unwrap();
        assert_eq!(product.cost_per_unit, dec!(4.00));
        assert_eq!(product.units_per_month, 500);
    }

    #[test]
    fn test_into_product_rejects_oversized_cost() {
        let err = mug_input("1e28", "10")
            .into_product("p-1".to_string(), ParseMode::Lenient)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "costPerUnit"
        ));
    }

    #[test]
    fn test_monthly_value_overflow_is_an_error() {
        let product = Product {
            cost_per_unit: Decimal::MAX,
            units_per_month: 10,
            ..Product::default()
        };
        assert!(matches!(product.monthly_value(), Err(Error::Overflow(_))));
    }

    #[test]
    fn test_into_product_strict_reports_field() {
        let err = mug_input("4.00", "many")
            .into_product("p-1".to_string(), ParseMode::Strict)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::FieldInvalid { ref field, .. }) if field == "unitsPerMonth"
        ));
    }

    #[test]
    fn test_into_product_keeps_supplied_id_and_drops_blank_hs_code() {
        let mut input = mug_input("1", "1");
        input.id = Some("existing".to_string());
        input.hs_code = Some("   ".to_string());
        let product = input
            .into_product("generated".to_string(), ParseMode::Lenient)
            .unwrap();
        assert_eq!(product.id, "existing");
        assert_eq!(product.hs_code, None);
    }

    #[test]
    fn test_into_product_requires_name() {
        let mut input = mug_input("1", "1");
        input.name = "  ".to_string();
        let err = input
            .into_product("p".to_string(), ParseMode::Lenient)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: "p".to_string(),
            name: "Beans".to_string(),
            hs_code: None,
            country_of_origin: "Colombia".to_string(),
            cost_per_unit: dec!(10),
            units_per_month: 100,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["countryOfOrigin"], "Colombia");
        assert_eq!(json["unitsPerMonth"], 100);
        assert_eq!(json["costPerUnit"], 10.0);
    }
}
