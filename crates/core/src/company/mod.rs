//! Company module - business profile captured at setup.

mod company_model;

pub(crate) use company_model::non_blank;
pub use company_model::{parse_hs_codes, CompanyProfile, NewCompanyProfile};
