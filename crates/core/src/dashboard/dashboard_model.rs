use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::risk::{RiskBreakdown, RiskLevel};

/// Headline figures for a company's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub company_id: String,
    pub business_name: String,
    pub active_alerts: usize,
    pub product_count: usize,
    pub flat_tariff_rate_percent: Decimal,
    /// Monthly impact at the flat rate, whole currency units
    pub monthly_impact: Decimal,
    pub monthly_impact_exact: Decimal,
    pub overall_risk: RiskLevel,
    pub risk_breakdown: RiskBreakdown,
}
