//! TariffWatch Core - tariff impact model, catalog and content services.
//!
//! The financial model (`tariffs`, `risk`, `scenarios`) is made of pure
//! functions over `Product` records. Persistence sits behind the traits in
//! `catalog`, and alert/strategy content behind `content`, so both can be
//! backed by external services.

pub mod catalog;
pub mod company;
pub mod constants;
pub mod content;
pub mod dashboard;
pub mod errors;
pub mod products;
pub mod risk;
pub mod scenarios;
pub mod settings;
pub mod tariffs;
pub mod utils;

// Re-export the model entry points
pub use products::{Product, ProductInput};
pub use risk::{classify_risk, RiskLevel};
pub use tariffs::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
