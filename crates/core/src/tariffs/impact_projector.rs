use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::products::Product;
use crate::tariffs::tariff_calculator::tariff_cost;
use crate::tariffs::ImpactAmount;
use crate::utils::numeric_utils::{checked, round_to_whole};

impl ImpactAmount {
    pub fn new(exact: Decimal) -> Self {
        Self {
            exact,
            rounded: round_to_whole(exact),
        }
    }
}

/// Monthly cost of a tariff rate change of `rate_delta_percent` points on a
/// product's monthly purchase volume.
pub fn compute_monthly_impact(product: &Product, rate_delta_percent: Decimal) -> Result<Decimal> {
    tariff_cost(product.monthly_value()?, rate_delta_percent)
}

/// Sums the monthly impact across `products` using one uniform rate.
///
/// Every product is charged `flat_rate_percent`; there is no per-HS-code
/// lookup. An empty catalog yields zero.
pub fn compute_aggregate_impact(
    products: &[Product],
    flat_rate_percent: Decimal,
) -> Result<ImpactAmount> {
    let total = products.iter().try_fold(Decimal::ZERO, |total, product| {
        let impact = compute_monthly_impact(product, flat_rate_percent)?;
        checked(total.checked_add(impact), "aggregate impact")
    })?;

    debug!(
        "Aggregate impact of {}% across {} products: {}",
        flat_rate_percent,
        products.len(),
        total
    );

    Ok(ImpactAmount::new(total))
}
