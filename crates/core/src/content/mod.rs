//! Content module - policy alerts, mitigation strategies and the relevance
//! filter that scopes them to a company.

mod content_model;
mod content_service;
mod content_traits;
pub mod relevance;
mod static_provider;

pub use content_model::{
    AlertSeverity, AlertView, ContentCatalog, MitigationStrategy, PolicyAlert, RelevanceTagged,
    StrategyPriority,
};
pub use content_service::ContentService;
pub use content_traits::{ContentProviderTrait, ContentServiceTrait};
pub use relevance::{filter_relevant, is_relevant, related_products};
pub use static_provider::StaticContentProvider;
