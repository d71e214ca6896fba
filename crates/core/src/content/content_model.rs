//! Policy alert and mitigation strategy models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Severity of a policy alert, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Favourable change (tariff relief, maintained exemptions)
    Positive,
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Positive => "positive",
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyPriority {
    Low,
    Medium,
    High,
}

/// Something that can be matched against a company's industry and products.
pub trait RelevanceTagged {
    fn industries(&self) -> &[String];
    fn related_keywords(&self) -> &[String];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAlert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
    pub category: String,
    pub published_on: NaiveDate,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub related_keywords: Vec<String>,
}

impl RelevanceTagged for PolicyAlert {
    fn industries(&self) -> &[String] {
        &self.industries
    }

    fn related_keywords(&self) -> &[String] {
        &self.related_keywords
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MitigationStrategy {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: StrategyPriority,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub related_keywords: Vec<String>,
}

impl RelevanceTagged for MitigationStrategy {
    fn industries(&self) -> &[String] {
        &self.industries
    }

    fn related_keywords(&self) -> &[String] {
        &self.related_keywords
    }
}

/// The full alert and mitigation catalog, in curated display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    #[serde(default)]
    pub alerts: Vec<PolicyAlert>,
    #[serde(default)]
    pub mitigations: Vec<MitigationStrategy>,
}

/// An alert together with the names of the company's products it concerns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: PolicyAlert,
    pub related_products: Vec<String>,
}
