//! Company profile domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::products::ProductInput;
use crate::{errors::ValidationError, Error, Result};

/// Business profile captured during setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: String,
    pub user_id: String,
    pub business_name: String,
    /// Industry tag used to pick relevant alerts and strategies
    pub industry: String,
    pub location: String,
    pub product_categories: Option<String>,
    pub hs_codes: Vec<String>,
    /// Free text about trading partners and markets
    pub trade_notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for the setup flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompanyProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub business_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub product_categories: Option<String>,
    /// Comma separated, as typed in the form
    #[serde(default)]
    pub hs_codes: Option<String>,
    #[serde(default)]
    pub trade_notes: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductInput>,
}

impl NewCompanyProfile {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        if self.business_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "businessName".to_string(),
            )));
        }
        Ok(())
    }
}

/// Splits a comma separated HS code list, dropping blanks and duplicates.
pub fn parse_hs_codes(raw: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !codes.iter().any(|existing| existing == code) {
            codes.push(code.to_string());
        }
    }
    codes
}

/// Normalizes optional free text: trimmed, `None` when blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
