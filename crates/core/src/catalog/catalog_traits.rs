//! Catalog repository and service traits.
//!
//! Persistence of companies and products lives behind these traits so the
//! financial model never depends on a particular backend.

use async_trait::async_trait;

use super::catalog_model::{CompanySetup, ProductPage};
use crate::company::{CompanyProfile, NewCompanyProfile};
use crate::errors::Result;
use crate::products::{Product, ProductInput};

/// Contract for the company/product store.
#[async_trait]
pub trait CatalogRepositoryTrait: Send + Sync {
    /// Profile owned by `user_id`, if the user has completed setup.
    fn get_company_profile(&self, user_id: &str) -> Result<Option<CompanyProfile>>;

    /// Retrieves a company by id. Fails with `NotFound` when missing.
    fn get_company(&self, company_id: &str) -> Result<CompanyProfile>;

    /// Products of a company in insertion order; empty when it has none.
    fn get_products(&self, company_id: &str) -> Result<Vec<Product>>;

    /// Inserts a new company profile. Fails with `AlreadyExists` when the id
    /// is taken or the user already owns a company.
    async fn create_company_profile(&self, profile: CompanyProfile) -> Result<CompanyProfile>;

    /// Inserts a product, or replaces the one with the same id in place.
    async fn save_product(&self, company_id: &str, product: Product) -> Result<Product>;

    /// Deletes a product. Returns the number of deleted records.
    async fn delete_product(&self, company_id: &str, product_id: &str) -> Result<usize>;
}

/// Contract for catalog operations used by the dashboard.
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    /// Creates a company profile together with its initial products.
    async fn setup_company(&self, input: NewCompanyProfile) -> Result<CompanySetup>;

    fn get_company_for_user(&self, user_id: &str) -> Result<Option<CompanyProfile>>;

    fn get_company(&self, company_id: &str) -> Result<CompanyProfile>;

    fn get_products(&self, company_id: &str) -> Result<Vec<Product>>;

    async fn add_product(&self, company_id: &str, input: ProductInput) -> Result<Product>;

    async fn remove_product(&self, company_id: &str, product_id: &str) -> Result<()>;

    /// Case-insensitive name search with paging. Out-of-range pages are
    /// clamped to the nearest valid page.
    fn search_products(&self, company_id: &str, query: &str, page: usize) -> Result<ProductPage>;
}
