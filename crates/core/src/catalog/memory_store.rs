//! In-process catalog store.
//!
//! Keeps companies and their products in concurrent maps. Durable storage is
//! provided by an external backend in deployments that need it; this store
//! serves the standalone server and tests.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;

use super::catalog_traits::CatalogRepositoryTrait;
use crate::company::CompanyProfile;
use crate::errors::{Error, Result};
use crate::products::Product;

#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    companies: DashMap<String, CompanyProfile>,
    /// user id -> company id; a user owns at most one company
    owners: DashMap<String, String>,
    products: DashMap<String, Vec<Product>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_company(&self, company_id: &str) -> Result<()> {
        if self.companies.contains_key(company_id) {
            Ok(())
        } else {
            Err(Error::NotFound(format!("company {}", company_id)))
        }
    }
}

#[async_trait]
impl CatalogRepositoryTrait for InMemoryCatalogStore {
    fn get_company_profile(&self, user_id: &str) -> Result<Option<CompanyProfile>> {
        let Some(company_id) = self.owners.get(user_id).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        Ok(self
            .companies
            .get(&company_id)
            .map(|entry| entry.value().clone()))
    }

    fn get_company(&self, company_id: &str) -> Result<CompanyProfile> {
        self.companies
            .get(company_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("company {}", company_id)))
    }

    fn get_products(&self, company_id: &str) -> Result<Vec<Product>> {
        self.ensure_company(company_id)?;
        Ok(self
            .products
            .get(company_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn create_company_profile(&self, profile: CompanyProfile) -> Result<CompanyProfile> {
        // Lock order: owners, then companies.
        let owner = match self.owners.entry(profile.user_id.clone()) {
            Entry::Occupied(entry) => {
                return Err(Error::AlreadyExists(format!(
                    "company for user {}",
                    entry.key()
                )))
            }
            Entry::Vacant(entry) => entry,
        };
        match self.companies.entry(profile.id.clone()) {
            Entry::Occupied(_) => Err(Error::AlreadyExists(format!("company {}", profile.id))),
            Entry::Vacant(entry) => {
                debug!("Creating company profile {}", profile.id);
                entry.insert(profile.clone());
                owner.insert(profile.id.clone());
                Ok(profile)
            }
        }
    }

    async fn save_product(&self, company_id: &str, product: Product) -> Result<Product> {
        self.ensure_company(company_id)?;
        let mut products = self.products.entry(company_id.to_string()).or_default();
        match products.iter_mut().find(|existing| existing.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product)
    }

    async fn delete_product(&self, company_id: &str, product_id: &str) -> Result<usize> {
        self.ensure_company(company_id)?;
        let Some(mut products) = self.products.get_mut(company_id) else {
            return Ok(0);
        };
        let before = products.len();
        products.retain(|product| product.id != product_id);
        Ok(before - products.len())
    }
}
