//! Dashboard module - headline figures combining catalog, model and content.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::DashboardSummary;
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
