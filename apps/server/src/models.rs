//! Request and response payloads for the HTTP API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tariffwatch_core::errors::Result as CoreResult;
use tariffwatch_core::risk::RiskLevel;
use tariffwatch_core::utils::numeric_utils::{
    check_amount, parse_amount, parse_units, units_from_decimal, ParseMode,
};

/// A numeric form field: either a JSON number or the raw text the user typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(Decimal),
    Text(String),
}

impl Default for NumberInput {
    fn default() -> Self {
        NumberInput::Number(Decimal::ZERO)
    }
}

impl NumberInput {
    pub fn resolve(&self, field: &str, mode: ParseMode) -> CoreResult<Decimal> {
        match self {
            NumberInput::Number(value) => check_amount(field, *value),
            NumberInput::Text(raw) => parse_amount(field, raw, mode),
        }
    }

    /// Resolves a unit volume, truncating fractions.
    pub fn resolve_units(&self, field: &str, mode: ParseMode) -> CoreResult<u32> {
        match self {
            NumberInput::Number(value) => units_from_decimal(field, *value, mode),
            NumberInput::Text(raw) => parse_units(field, raw, mode),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffDeltaRequest {
    #[serde(default)]
    pub base_value: NumberInput,
    #[serde(default)]
    pub current_rate_percent: NumberInput,
    #[serde(default)]
    pub new_rate_percent: NumberInput,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PricingModeName {
    Margin,
    Retail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(default)]
    pub wholesale_cost: NumberInput,
    #[serde(default)]
    pub tariff_rate_percent: NumberInput,
    pub mode: PricingModeName,
    /// Target margin percent in margin mode, retail price in retail mode
    #[serde(default)]
    pub value: NumberInput,
    #[serde(default)]
    pub units_per_month: Option<NumberInput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResponse {
    pub risk: RiskLevel,
    pub label: String,
    pub monthly_value: Decimal,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub page: Option<usize>,
}
