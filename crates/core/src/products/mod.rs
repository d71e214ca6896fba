//! Products module - catalog item models and form conversion.

mod products_model;
mod products_model_tests;

pub use products_model::{Product, ProductInput};
