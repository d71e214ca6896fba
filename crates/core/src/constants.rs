use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Uniform tariff rate assumed across the catalog when no per-product rate is known
pub const DEFAULT_FLAT_TARIFF_RATE: Decimal = dec!(15);

/// Monthly exposure above which a product sourced from China is high risk
pub const HIGH_RISK_EXPOSURE_THRESHOLD: Decimal = dec!(1000);

/// Monthly exposure above which a product is at least medium risk
pub const MEDIUM_RISK_EXPOSURE_THRESHOLD: Decimal = dec!(500);

/// Origin country that, combined with high exposure, marks a product high risk
pub const HIGH_RISK_ORIGIN: &str = "china";

/// Products shown per page in the catalog listing
pub const DEFAULT_PRODUCTS_PER_PAGE: usize = 10;

/// Scenario rate increases, in percentage points
pub const BEST_CASE_RATE_INCREASE: Decimal = dec!(0);
pub const LIKELY_CASE_RATE_INCREASE: Decimal = dec!(10);
pub const WORST_CASE_RATE_INCREASE: Decimal = dec!(25);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Largest magnitude accepted for a typed amount or rate
pub const MAX_INPUT_AMOUNT: Decimal = dec!(1000000000000);
