//! Tariff financial model - pure calculators for tariff deltas, catalog
//! impact and retail pricing.

mod impact_projector;
mod pricing_resolver;
mod tariff_calculator;
mod tariffs_model;
mod tariffs_tests;

pub use impact_projector::{compute_aggregate_impact, compute_monthly_impact};
pub use pricing_resolver::{
    implied_margin_percent, landed_cost, required_retail_price, resolve_pricing,
};
pub use tariff_calculator::{compute_tariff_delta, tariff_cost};
pub use tariffs_model::{ImpactAmount, PricingMode, PricingResult, TariffDelta};
