//! Tariff exposure risk classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    HIGH_RISK_EXPOSURE_THRESHOLD, HIGH_RISK_ORIGIN, MEDIUM_RISK_EXPOSURE_THRESHOLD,
};
use crate::products::Product;

/// Risk bucket for a product's tariff exposure.
///
/// Ordered from lowest to highest so the worst level in a catalog is its `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Buckets a product by monthly exposure and origin.
///
/// High requires both a Chinese origin (case-insensitive) and monthly
/// exposure strictly above 1000; otherwise exposure strictly above 500 is
/// medium. Recomputed on every call, never stored. An exposure too large to
/// represent is above every threshold.
pub fn classify_risk(product: &Product) -> RiskLevel {
    let exposure = product.monthly_value().unwrap_or(Decimal::MAX);
    classify_exposure(exposure, &product.country_of_origin)
}

pub fn classify_exposure(monthly_value: Decimal, country_of_origin: &str) -> RiskLevel {
    let high_risk_origin = country_of_origin.eq_ignore_ascii_case(HIGH_RISK_ORIGIN);
    if high_risk_origin && monthly_value > HIGH_RISK_EXPOSURE_THRESHOLD {
        RiskLevel::High
    } else if monthly_value > MEDIUM_RISK_EXPOSURE_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Product counts per risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskBreakdown {
    pub fn from_products(products: &[Product]) -> Self {
        products
            .iter()
            .map(classify_risk)
            .fold(Self::default(), |mut acc, level| {
                match level {
                    RiskLevel::Low => acc.low += 1,
                    RiskLevel::Medium => acc.medium += 1,
                    RiskLevel::High => acc.high += 1,
                }
                acc
            })
    }

    /// Highest level present, `Low` for an empty catalog.
    pub fn overall(&self) -> RiskLevel {
        if self.high > 0 {
            RiskLevel::High
        } else if self.medium > 0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
