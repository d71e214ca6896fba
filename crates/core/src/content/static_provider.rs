use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::content::{ContentCatalog, ContentProviderTrait, MitigationStrategy, PolicyAlert};
use crate::errors::{Error, Result};

const BUILTIN_CATALOG: &str = include_str!("../../data/policy_content.json");

/// Immutable content catalog loaded once at startup.
#[derive(Debug, Clone)]
pub struct StaticContentProvider {
    catalog: Arc<ContentCatalog>,
}

impl StaticContentProvider {
    pub fn from_catalog(catalog: ContentCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: ContentCatalog = serde_json::from_str(json)?;
        validate_catalog(&catalog)?;
        debug!(
            "Loaded content catalog: {} alerts, {} mitigations",
            catalog.alerts.len(),
            catalog.mitigations.len()
        );
        Ok(Self::from_catalog(catalog))
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading content catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }
}

fn validate_catalog(catalog: &ContentCatalog) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    let ids = catalog
        .alerts
        .iter()
        .map(|a| a.id.as_str())
        .chain(catalog.mitigations.iter().map(|m| m.id.as_str()));
    for id in ids {
        if id.trim().is_empty() {
            return Err(Error::Content("catalog entry with empty id".to_string()));
        }
        if !seen.insert(id) {
            return Err(Error::Content(format!("duplicate catalog id '{}'", id)));
        }
    }
    Ok(())
}

impl ContentProviderTrait for StaticContentProvider {
    fn list_alerts(&self) -> Result<Vec<PolicyAlert>> {
        Ok(self.catalog.alerts.clone())
    }

    fn list_mitigations(&self) -> Result<Vec<MitigationStrategy>> {
        Ok(self.catalog.mitigations.clone())
    }
}
