//! Product domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::numeric_utils::{checked, parse_amount, parse_units, ParseMode};
use crate::{errors::ValidationError, Error, Result};

/// An imported product in a company's catalog.
///
/// Read-only to the financial model; every calculation derives new values
/// from it on each call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Harmonized System code, display only
    pub hs_code: Option<String>,
    pub country_of_origin: String,
    /// Wholesale cost per unit before tariff
    pub cost_per_unit: Decimal,
    pub units_per_month: u32,
}

impl Product {
    /// Monthly exposure value: `cost_per_unit * units_per_month`.
    pub fn monthly_value(&self) -> Result<Decimal> {
        checked(
            self.cost_per_unit
                .checked_mul(Decimal::from(self.units_per_month)),
            "monthly value",
        )
    }
}

/// A product as entered in the setup form, numeric fields still raw text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub hs_code: Option<String>,
    #[serde(default)]
    pub country_of_origin: String,
    #[serde(default)]
    pub cost_per_unit: String,
    #[serde(default)]
    pub units_per_month: String,
}

impl ProductInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }

    /// Converts the form input into a `Product`, applying `mode` to the
    /// numeric fields. A supplied id wins over `fallback_id`.
    pub fn into_product(self, fallback_id: String, mode: ParseMode) -> Result<Product> {
        self.validate()?;
        let cost_per_unit = parse_amount("costPerUnit", &self.cost_per_unit, mode)?;
        let units_per_month = parse_units("unitsPerMonth", &self.units_per_month, mode)?;
        let hs_code = self
            .hs_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        Ok(Product {
            id: self.id.unwrap_or(fallback_id),
            name: self.name.trim().to_string(),
            hs_code,
            country_of_origin: self.country_of_origin.trim().to_string(),
            cost_per_unit,
            units_per_month,
        })
    }
}
