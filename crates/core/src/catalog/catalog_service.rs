use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use super::catalog_model::{CompanySetup, ProductPage, ProductRow};
use super::catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
use crate::company::{non_blank, parse_hs_codes, CompanyProfile, NewCompanyProfile};
use crate::errors::{Error, Result};
use crate::products::{Product, ProductInput};
use crate::risk::classify_risk;
use crate::settings::ModelSettings;
use crate::tariffs::landed_cost;

/// Service for company setup and catalog browsing.
pub struct CatalogService {
    repository: Arc<dyn CatalogRepositoryTrait>,
    settings: ModelSettings,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepositoryTrait>, settings: ModelSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    fn to_row(&self, product: Product) -> Result<ProductRow> {
        Ok(ProductRow {
            risk: classify_risk(&product),
            monthly_value: product.monthly_value()?,
            landed_cost: landed_cost(product.cost_per_unit, self.settings.flat_tariff_rate_percent)?,
            product,
        })
    }
}

/// Slices `rows` into the requested 1-based page, clamping the page number.
pub(crate) fn paginate(rows: Vec<ProductRow>, page: usize, per_page: usize) -> ProductPage {
    let per_page = per_page.max(1);
    let total_items = rows.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let items = rows
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    ProductPage {
        items,
        page,
        per_page,
        total_pages,
        total_items,
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn setup_company(&self, input: NewCompanyProfile) -> Result<CompanySetup> {
        input.validate()?;

        let now = Utc::now().naive_utc();
        let profile = CompanyProfile {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: input.user_id.trim().to_string(),
            business_name: input.business_name.trim().to_string(),
            industry: input.industry.trim().to_string(),
            location: input.location.trim().to_string(),
            product_categories: non_blank(input.product_categories),
            hs_codes: input
                .hs_codes
                .as_deref()
                .map(parse_hs_codes)
                .unwrap_or_default(),
            trade_notes: non_blank(input.trade_notes),
            created_at: now,
            updated_at: now,
        };

        // All products must parse before anything is persisted.
        let products = input
            .products
            .into_iter()
            .map(|p| p.into_product(Uuid::new_v4().to_string(), self.settings.parse_mode))
            .collect::<Result<Vec<_>>>()?;

        let profile = self.repository.create_company_profile(profile).await?;
        let mut saved = Vec::with_capacity(products.len());
        for product in products {
            saved.push(self.repository.save_product(&profile.id, product).await?);
        }

        info!(
            "Company '{}' set up with {} products",
            profile.business_name,
            saved.len()
        );

        Ok(CompanySetup {
            profile,
            products: saved,
        })
    }

    fn get_company_for_user(&self, user_id: &str) -> Result<Option<CompanyProfile>> {
        self.repository.get_company_profile(user_id)
    }

    fn get_company(&self, company_id: &str) -> Result<CompanyProfile> {
        self.repository.get_company(company_id)
    }

    fn get_products(&self, company_id: &str) -> Result<Vec<Product>> {
        self.repository.get_products(company_id)
    }

    async fn add_product(&self, company_id: &str, input: ProductInput) -> Result<Product> {
        let product = input.into_product(Uuid::new_v4().to_string(), self.settings.parse_mode)?;
        debug!("Adding product '{}' to company {}", product.name, company_id);
        self.repository.save_product(company_id, product).await
    }

    async fn remove_product(&self, company_id: &str, product_id: &str) -> Result<()> {
        let deleted = self.repository.delete_product(company_id, product_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("product {}", product_id)));
        }
        Ok(())
    }

    fn search_products(&self, company_id: &str, query: &str, page: usize) -> Result<ProductPage> {
        let needle = query.trim().to_lowercase();
        let rows = self
            .repository
            .get_products(company_id)?
            .into_iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .map(|product| self.to_row(product))
            .collect::<Result<Vec<_>>>()?;

        Ok(paginate(rows, page, self.settings.products_per_page))
    }
}
