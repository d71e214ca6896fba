//! Core error types for the TariffWatch domain.
//!
//! Storage-specific errors are converted to these types by whichever store
//! implements the catalog traits, keeping this module storage-agnostic.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tariff model and its services.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Pricing calculation failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Arithmetic overflow computing {0}")]
    Overflow(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Content catalog error: {0}")]
    Content(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors raised at the input boundary.
///
/// The pure model never sees these: in lenient mode unparsable numbers are
/// substituted with zero before they reach any calculator.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Field '{field}' has an invalid numeric value '{value}'")]
    FieldInvalid { field: String, value: String },

    #[error("Field '{field}' value '{value}' is outside the supported range")]
    OutOfRange { field: String, value: String },

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Errors from the margin/pricing resolver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Target margin must be below 100%, got {target_margin}%")]
    InvalidMargin { target_margin: Decimal },

    #[error("Retail price for a {target_margin}% margin is too large to represent")]
    PriceOverflow { target_margin: Decimal },
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Content(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Content(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
