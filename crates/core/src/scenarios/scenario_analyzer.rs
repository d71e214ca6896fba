//! Best/likely/worst tariff outlook for a catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::Result;
use crate::products::Product;
use crate::settings::ScenarioRates;
use crate::tariffs::compute_aggregate_impact;
use crate::utils::numeric_utils::{checked, round_to_whole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioKind {
    BestCase,
    LikelyCase,
    WorstCase,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::BestCase,
        ScenarioKind::LikelyCase,
        ScenarioKind::WorstCase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::BestCase => "Best Case",
            ScenarioKind::LikelyCase => "Likely Case",
            ScenarioKind::WorstCase => "Worst Case",
        }
    }

    pub fn rate_increase(&self, rates: &ScenarioRates) -> Decimal {
        match self {
            ScenarioKind::BestCase => rates.best_case,
            ScenarioKind::LikelyCase => rates.likely_case,
            ScenarioKind::WorstCase => rates.worst_case,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub kind: ScenarioKind,
    pub name: String,
    pub description: String,
    pub rate_increase_percent: Decimal,
    pub monthly_impact: Decimal,
    pub annual_impact: Decimal,
    /// `annual_impact` rounded to whole currency units
    pub annual_impact_display: Decimal,
}

fn describe(rate_increase: Decimal) -> String {
    if rate_increase.is_zero() {
        "Tariffs remain at current levels".to_string()
    } else if rate_increase.is_sign_negative() {
        format!("Tariffs decrease by {}%", rate_increase.abs().normalize())
    } else {
        format!("Tariffs increase by {}%", rate_increase.normalize())
    }
}

/// Projects the extra spend of each scenario's rate increase across the catalog.
///
/// Outcomes are returned best, likely, worst.
pub fn analyze_scenarios(
    products: &[Product],
    rates: &ScenarioRates,
) -> Result<Vec<ScenarioOutcome>> {
    ScenarioKind::ALL
        .iter()
        .map(|kind| {
            let rate_increase = kind.rate_increase(rates);
            let monthly = compute_aggregate_impact(products, rate_increase)?.exact;
            let annual = checked(monthly.checked_mul(MONTHS_PER_YEAR), "annual impact")?;
            Ok(ScenarioOutcome {
                kind: *kind,
                name: kind.name().to_string(),
                description: describe(rate_increase),
                rate_increase_percent: rate_increase,
                monthly_impact: monthly,
                annual_impact: annual,
                annual_impact_display: round_to_whole(annual),
            })
        })
        .collect()
}
