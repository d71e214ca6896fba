use std::sync::Arc;

use log::debug;

use super::dashboard_model::DashboardSummary;
use crate::catalog::CatalogRepositoryTrait;
use crate::content::ContentServiceTrait;
use crate::errors::Result;
use crate::risk::RiskBreakdown;
use crate::scenarios::{analyze_scenarios, ScenarioOutcome};
use crate::settings::ModelSettings;
use crate::tariffs::{compute_aggregate_impact, ImpactAmount};

pub trait DashboardServiceTrait: Send + Sync {
    fn summary(&self, company_id: &str) -> Result<DashboardSummary>;

    /// Monthly impact of the flat rate across the company's catalog.
    fn aggregate_impact(&self, company_id: &str) -> Result<ImpactAmount>;

    fn scenarios(&self, company_id: &str) -> Result<Vec<ScenarioOutcome>>;
}

pub struct DashboardService {
    catalog: Arc<dyn CatalogRepositoryTrait>,
    content: Arc<dyn ContentServiceTrait>,
    settings: ModelSettings,
}

impl DashboardService {
    pub fn new(
        catalog: Arc<dyn CatalogRepositoryTrait>,
        content: Arc<dyn ContentServiceTrait>,
        settings: ModelSettings,
    ) -> Self {
        Self {
            catalog,
            content,
            settings,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn summary(&self, company_id: &str) -> Result<DashboardSummary> {
        let company = self.catalog.get_company(company_id)?;
        let products = self.catalog.get_products(company_id)?;
        let alerts = self.content.alerts_for_company(company_id)?;

        let impact = compute_aggregate_impact(&products, self.settings.flat_tariff_rate_percent)?;
        let risk_breakdown = RiskBreakdown::from_products(&products);

        debug!(
            "Dashboard for {}: {} products, impact {}, risk {}",
            company_id,
            products.len(),
            impact.exact,
            risk_breakdown.overall()
        );

        Ok(DashboardSummary {
            company_id: company.id,
            business_name: company.business_name,
            active_alerts: alerts.len(),
            product_count: products.len(),
            flat_tariff_rate_percent: self.settings.flat_tariff_rate_percent,
            monthly_impact: impact.rounded,
            monthly_impact_exact: impact.exact,
            overall_risk: risk_breakdown.overall(),
            risk_breakdown,
        })
    }

    fn aggregate_impact(&self, company_id: &str) -> Result<ImpactAmount> {
        let products = self.catalog.get_products(company_id)?;
        compute_aggregate_impact(&products, self.settings.flat_tariff_rate_percent)
    }

    fn scenarios(&self, company_id: &str) -> Result<Vec<ScenarioOutcome>> {
        let products = self.catalog.get_products(company_id)?;
        analyze_scenarios(&products, &self.settings.scenario_rates)
    }
}
