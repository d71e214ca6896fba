//! Model assumptions that callers may tune.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BEST_CASE_RATE_INCREASE, DEFAULT_FLAT_TARIFF_RATE, DEFAULT_PRODUCTS_PER_PAGE,
    LIKELY_CASE_RATE_INCREASE, WORST_CASE_RATE_INCREASE,
};
use crate::errors::{Error, Result};
use crate::utils::numeric_utils::ParseMode;

/// Rate increases, in percentage points, for the three outlook scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRates {
    pub best_case: Decimal,
    pub likely_case: Decimal,
    pub worst_case: Decimal,
}

impl Default for ScenarioRates {
    fn default() -> Self {
        Self {
            best_case: BEST_CASE_RATE_INCREASE,
            likely_case: LIKELY_CASE_RATE_INCREASE,
            worst_case: WORST_CASE_RATE_INCREASE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    /// Uniform rate used for catalog-wide impact and product landed cost
    #[serde(default = "default_flat_rate")]
    pub flat_tariff_rate_percent: Decimal,
    #[serde(default)]
    pub scenario_rates: ScenarioRates,
    #[serde(default)]
    pub parse_mode: ParseMode,
    #[serde(default = "default_products_per_page")]
    pub products_per_page: usize,
}

fn default_flat_rate() -> Decimal {
    DEFAULT_FLAT_TARIFF_RATE
}

fn default_products_per_page() -> usize {
    DEFAULT_PRODUCTS_PER_PAGE
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            flat_tariff_rate_percent: DEFAULT_FLAT_TARIFF_RATE,
            scenario_rates: ScenarioRates::default(),
            parse_mode: ParseMode::default(),
            products_per_page: DEFAULT_PRODUCTS_PER_PAGE,
        }
    }
}

impl ModelSettings {
    pub fn validate(&self) -> Result<()> {
        if self.flat_tariff_rate_percent.is_sign_negative() {
            return Err(Error::InvalidConfigValue(format!(
                "flat tariff rate cannot be negative: {}",
                self.flat_tariff_rate_percent
            )));
        }
        if self.products_per_page == 0 {
            return Err(Error::InvalidConfigValue(
                "products per page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
