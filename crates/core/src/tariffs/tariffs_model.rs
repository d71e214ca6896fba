//! Tariff model value types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cost of a tariff change on a single base value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffDelta {
    pub current_cost: Decimal,
    pub new_cost: Decimal,
    pub cost_increase: Decimal,
    /// Increase relative to the current tariff cost; zero when that cost is zero
    pub percent_increase: Decimal,
}

/// A monetary impact with its exact value and the whole-unit figure shown
/// to users. Chained calculations must use `exact`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAmount {
    pub exact: Decimal,
    pub rounded: Decimal,
}

/// Which input drives the pricing resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum PricingMode {
    /// Target margin percent; the resolver derives the retail price
    Margin(Decimal),
    /// Known retail price; the resolver derives the margin
    Retail(Decimal),
}

/// Output of the pricing resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub landed_cost: Decimal,
    pub retail_price: Decimal,
    pub margin_percent: Decimal,
    /// Price at which margin is exactly zero; always equals the landed cost
    pub break_even_price: Decimal,
    /// Extra monthly spend caused by the tariff, present only when a volume is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_monthly_cost: Option<Decimal>,
}
