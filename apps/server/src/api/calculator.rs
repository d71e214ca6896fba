use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tariffwatch_core::{
    classify_risk, compute_tariff_delta, resolve_pricing, PricingMode, PricingResult,
    ProductInput, TariffDelta,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{PricingModeName, PricingRequest, RiskResponse, TariffDeltaRequest},
};

async fn tariff_delta(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TariffDeltaRequest>,
) -> ApiResult<Json<TariffDelta>> {
    let mode = state.settings.parse_mode;
    let delta = compute_tariff_delta(
        req.base_value.resolve("baseValue", mode)?,
        req.current_rate_percent.resolve("currentRatePercent", mode)?,
        req.new_rate_percent.resolve("newRatePercent", mode)?,
    )?;
    Ok(Json(delta))
}

async fn pricing(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PricingRequest>,
) -> ApiResult<Json<PricingResult>> {
    let mode = state.settings.parse_mode;
    let value = req.value.resolve("value", mode)?;
    let pricing_mode = match req.mode {
        PricingModeName::Margin => PricingMode::Margin(value),
        PricingModeName::Retail => PricingMode::Retail(value),
    };
    let units = req
        .units_per_month
        .as_ref()
        .map(|units| units.resolve_units("unitsPerMonth", mode))
        .transpose()?;
    let result = resolve_pricing(
        req.wholesale_cost.resolve("wholesaleCost", mode)?,
        req.tariff_rate_percent.resolve("tariffRatePercent", mode)?,
        pricing_mode,
        units,
    )?;
    Ok(Json(result))
}

async fn risk(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ProductInput>,
) -> ApiResult<Json<RiskResponse>> {
    let product = input.into_product(String::new(), state.settings.parse_mode)?;
    let risk = classify_risk(&product);
    Ok(Json(RiskResponse {
        risk,
        label: risk.label().to_string(),
        monthly_value: product.monthly_value()?,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculator/tariff-delta", post(tariff_delta))
        .route("/calculator/pricing", post(pricing))
        .route("/calculator/risk", post(risk))
}
