use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tariffwatch_core::{
    catalog::{CompanySetup, ProductPage},
    company::{CompanyProfile, NewCompanyProfile},
    content::{AlertView, MitigationStrategy},
    dashboard::DashboardSummary,
    scenarios::ScenarioOutcome,
    ImpactAmount, Product, ProductInput,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ProductSearchQuery,
};

async fn setup_company(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCompanyProfile>,
) -> ApiResult<(StatusCode, Json<CompanySetup>)> {
    let setup = state.catalog_service.setup_company(payload).await?;
    Ok((StatusCode::CREATED, Json(setup)))
}

async fn get_company_for_user(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CompanyProfile>> {
    state
        .catalog_service
        .get_company_for_user(&user_id)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn list_products(
    Path(company_id): Path<String>,
    Query(query): Query<ProductSearchQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProductPage>> {
    let page = state.catalog_service.search_products(
        &company_id,
        &query.search,
        query.page.unwrap_or(1),
    )?;
    Ok(Json(page))
}

async fn add_product(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProductInput>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state
        .catalog_service
        .add_product(&company_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn delete_product(
    Path((company_id, product_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .catalog_service
        .remove_product(&company_id, &product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_impact(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ImpactAmount>> {
    let impact = state.dashboard_service.aggregate_impact(&company_id)?;
    Ok(Json(impact))
}

async fn get_scenarios(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ScenarioOutcome>>> {
    let scenarios = state.dashboard_service.scenarios(&company_id)?;
    Ok(Json(scenarios))
}

async fn get_alerts(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AlertView>>> {
    let alerts = state.content_service.alerts_for_company(&company_id)?;
    Ok(Json(alerts))
}

async fn get_mitigations(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MitigationStrategy>>> {
    let strategies = state.content_service.mitigations_for_company(&company_id)?;
    Ok(Json(strategies))
}

async fn get_dashboard(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state.dashboard_service.summary(&company_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", post(setup_company))
        .route("/companies/by-user/{user_id}", get(get_company_for_user))
        .route(
            "/companies/{id}/products",
            get(list_products).post(add_product),
        )
        .route(
            "/companies/{id}/products/{product_id}",
            delete(delete_product),
        )
        .route("/companies/{id}/impact", get(get_impact))
        .route("/companies/{id}/scenarios", get(get_scenarios))
        .route("/companies/{id}/alerts", get(get_alerts))
        .route("/companies/{id}/mitigations", get(get_mitigations))
        .route("/companies/{id}/dashboard", get(get_dashboard))
}
