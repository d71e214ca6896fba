//! Catalog module - company/product store contract, in-memory store and
//! catalog service.

mod catalog_model;
mod catalog_service;
mod catalog_traits;
mod memory_store;

pub use catalog_model::{CompanySetup, ProductPage, ProductRow};
pub use catalog_service::CatalogService;
pub use catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
pub use memory_store::InMemoryCatalogStore;
