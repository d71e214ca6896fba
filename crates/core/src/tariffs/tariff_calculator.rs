use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::tariffs::TariffDelta;
use crate::utils::numeric_utils::checked;

const HUNDRED: Decimal = dec!(100);

/// Tariff charged on `base_value` at `rate_percent`.
pub fn tariff_cost(base_value: Decimal, rate_percent: Decimal) -> Result<Decimal> {
    checked(
        base_value
            .checked_mul(rate_percent)
            .and_then(|v| v.checked_div(HUNDRED)),
        "tariff cost",
    )
}

/// Computes the cost of moving from `current_rate_percent` to
/// `new_rate_percent` on a single unit of `base_value`.
///
/// Rates are not clamped; negative or above-slider rates compute as written.
/// When the current tariff cost is zero the percentage increase is reported
/// as zero. Values too large to represent fail with `Error::Overflow`.
pub fn compute_tariff_delta(
    base_value: Decimal,
    current_rate_percent: Decimal,
    new_rate_percent: Decimal,
) -> Result<TariffDelta> {
    let current_cost = tariff_cost(base_value, current_rate_percent)?;
    let new_cost = tariff_cost(base_value, new_rate_percent)?;
    let cost_increase = checked(new_cost.checked_sub(current_cost), "cost increase")?;
    let percent_increase = if current_cost > Decimal::ZERO {
        checked(
            cost_increase
                .checked_div(current_cost)
                .and_then(|ratio| ratio.checked_mul(HUNDRED)),
            "percent increase",
        )?
    } else {
        Decimal::ZERO
    };

    debug!(
        "Tariff delta on {}: {}% -> {}% adds {} ({}%)",
        base_value, current_rate_percent, new_rate_percent, cost_increase, percent_increase
    );

    Ok(TariffDelta {
        current_cost,
        new_cost,
        cost_increase,
        percent_increase,
    })
}
