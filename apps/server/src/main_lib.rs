use std::sync::Arc;

use crate::config::Config;
use tariffwatch_core::{
    catalog::{CatalogRepositoryTrait, CatalogService, CatalogServiceTrait, InMemoryCatalogStore},
    content::{ContentProviderTrait, ContentService, ContentServiceTrait, StaticContentProvider},
    dashboard::{DashboardService, DashboardServiceTrait},
    settings::ModelSettings,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub catalog_service: Arc<dyn CatalogServiceTrait + Send + Sync>,
    pub content_service: Arc<dyn ContentServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub settings: ModelSettings,
}

pub fn init_tracing() {
    let log_format = std::env::var("TW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn ContentProviderTrait> = match &config.content_file {
        Some(path) => {
            tracing::info!("Content catalog file in use: {}", path.display());
            Arc::new(StaticContentProvider::from_path(path)?)
        }
        None => Arc::new(StaticContentProvider::builtin()?),
    };

    let store: Arc<dyn CatalogRepositoryTrait> = Arc::new(InMemoryCatalogStore::new());
    let settings = config.model.clone();

    let catalog_service = Arc::new(CatalogService::new(store.clone(), settings.clone()));
    let content_service = Arc::new(ContentService::new(provider, store.clone()));
    let dashboard_service = Arc::new(DashboardService::new(
        store,
        content_service.clone(),
        settings.clone(),
    ));

    tracing::info!(
        "Model settings: flat rate {}%, parse mode {:?}",
        settings.flat_tariff_rate_percent,
        settings.parse_mode
    );

    Ok(Arc::new(AppState {
        catalog_service,
        content_service,
        dashboard_service,
        settings,
    }))
}
