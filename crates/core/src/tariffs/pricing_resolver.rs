use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{PricingError, Result};
use crate::tariffs::{PricingMode, PricingResult};
use crate::utils::numeric_utils::checked;

const HUNDRED: Decimal = dec!(100);

/// Wholesale cost plus tariff.
pub fn landed_cost(wholesale_cost: Decimal, tariff_rate_percent: Decimal) -> Result<Decimal> {
    checked(
        (tariff_rate_percent / HUNDRED)
            .checked_add(Decimal::ONE)
            .and_then(|factor| wholesale_cost.checked_mul(factor)),
        "landed cost",
    )
}

/// Retail price needed to earn `target_margin_percent` on `landed_cost`.
///
/// Margins of 100% or more have no finite positive price and are rejected.
/// Margins so close to 100% that the price cannot be represented fail with
/// `PricingError::PriceOverflow`.
pub fn required_retail_price(landed_cost: Decimal, target_margin_percent: Decimal) -> Result<Decimal> {
    if target_margin_percent >= HUNDRED {
        return Err(PricingError::InvalidMargin {
            target_margin: target_margin_percent,
        }
        .into());
    }
    let cost_share = Decimal::ONE - target_margin_percent / HUNDRED;
    landed_cost.checked_div(cost_share).ok_or_else(|| {
        PricingError::PriceOverflow {
            target_margin: target_margin_percent,
        }
        .into()
    })
}

/// Margin earned selling at `retail_price`, as a percent of that price.
/// A non-positive price yields zero.
pub fn implied_margin_percent(retail_price: Decimal, landed_cost: Decimal) -> Result<Decimal> {
    if retail_price <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    checked(
        retail_price
            .checked_sub(landed_cost)
            .and_then(|profit| profit.checked_div(retail_price))
            .and_then(|share| share.checked_mul(HUNDRED)),
        "margin percent",
    )
}

/// Resolves landed cost, retail price, margin and break-even for one unit.
///
/// `units_per_month`, when known, attaches the extra monthly spend the tariff
/// causes at that volume.
pub fn resolve_pricing(
    wholesale_cost: Decimal,
    tariff_rate_percent: Decimal,
    mode: PricingMode,
    units_per_month: Option<u32>,
) -> Result<PricingResult> {
    let landed = landed_cost(wholesale_cost, tariff_rate_percent)?;

    let (retail_price, margin_percent) = match mode {
        PricingMode::Margin(target) => (required_retail_price(landed, target)?, target),
        PricingMode::Retail(price) => (price, implied_margin_percent(price, landed)?),
    };

    let additional_monthly_cost = units_per_month
        .map(|units| {
            checked(
                landed
                    .checked_sub(wholesale_cost)
                    .and_then(|per_unit| per_unit.checked_mul(Decimal::from(units))),
                "additional monthly cost",
            )
        })
        .transpose()?;

    debug!(
        "Resolved pricing: landed {} retail {} margin {}%",
        landed, retail_price, margin_percent
    );

    Ok(PricingResult {
        landed_cost: landed,
        retail_price,
        margin_percent,
        break_even_price: landed,
        additional_monthly_cost,
    })
}
