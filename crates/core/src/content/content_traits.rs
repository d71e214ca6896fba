use crate::content::{AlertView, MitigationStrategy, PolicyAlert};
use crate::errors::Result;

/// Source of policy alerts and mitigation strategies.
///
/// Implementations return items in their curated display order. The built-in
/// provider serves a fixed catalog; a live policy feed can stand in for it
/// without touching the relevance filter.
pub trait ContentProviderTrait: Send + Sync {
    fn list_alerts(&self) -> Result<Vec<PolicyAlert>>;

    fn list_mitigations(&self) -> Result<Vec<MitigationStrategy>>;
}

/// Alert and strategy lookups scoped to a company.
pub trait ContentServiceTrait: Send + Sync {
    /// Alerts relevant to the company, each with the products it concerns.
    fn alerts_for_company(&self, company_id: &str) -> Result<Vec<AlertView>>;

    /// Mitigation strategies relevant to the company.
    fn mitigations_for_company(&self, company_id: &str) -> Result<Vec<MitigationStrategy>>;
}
