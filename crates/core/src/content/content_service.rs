use std::sync::Arc;

use log::debug;

use crate::catalog::CatalogRepositoryTrait;
use crate::content::relevance::{filter_relevant, related_products};
use crate::content::{AlertView, ContentProviderTrait, ContentServiceTrait, MitigationStrategy};
use crate::errors::Result;
use crate::products::Product;

pub struct ContentService {
    provider: Arc<dyn ContentProviderTrait>,
    catalog: Arc<dyn CatalogRepositoryTrait>,
}

impl ContentService {
    pub fn new(
        provider: Arc<dyn ContentProviderTrait>,
        catalog: Arc<dyn CatalogRepositoryTrait>,
    ) -> Self {
        Self { provider, catalog }
    }

    /// Relevant alerts for an industry and product list, without a stored company.
    pub fn relevant_alerts(&self, industry: &str, products: &[Product]) -> Result<Vec<AlertView>> {
        let alerts = self.provider.list_alerts()?;
        Ok(filter_relevant(&alerts, industry, products)
            .into_iter()
            .map(|alert| AlertView {
                related_products: related_products(&alert, products),
                alert,
            })
            .collect())
    }

    pub fn relevant_mitigations(
        &self,
        industry: &str,
        products: &[Product],
    ) -> Result<Vec<MitigationStrategy>> {
        let strategies = self.provider.list_mitigations()?;
        Ok(filter_relevant(&strategies, industry, products))
    }
}

impl ContentServiceTrait for ContentService {
    fn alerts_for_company(&self, company_id: &str) -> Result<Vec<AlertView>> {
        let company = self.catalog.get_company(company_id)?;
        let products = self.catalog.get_products(company_id)?;
        let alerts = self.relevant_alerts(&company.industry, &products)?;
        debug!("{} alerts relevant to company {}", alerts.len(), company_id);
        Ok(alerts)
    }

    fn mitigations_for_company(&self, company_id: &str) -> Result<Vec<MitigationStrategy>> {
        let company = self.catalog.get_company(company_id)?;
        let products = self.catalog.get_products(company_id)?;
        self.relevant_mitigations(&company.industry, &products)
    }
}
