//! Catalog listing and setup result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::company::CompanyProfile;
use crate::products::Product;
use crate::risk::RiskLevel;

/// A product with the figures shown in the catalog list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    #[serde(flatten)]
    pub product: Product,
    pub risk: RiskLevel,
    pub monthly_value: Decimal,
    /// Unit cost with the flat tariff rate applied
    pub landed_cost: Decimal,
}

/// One page of a filtered product listing. Pages are 1-based.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub items: Vec<ProductRow>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Result of the setup flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanySetup {
    pub profile: CompanyProfile,
    pub products: Vec<Product>,
}
