//! Risk module - exposure-based product risk buckets.

mod risk_classifier;

pub use risk_classifier::{classify_exposure, classify_risk, RiskBreakdown, RiskLevel};
