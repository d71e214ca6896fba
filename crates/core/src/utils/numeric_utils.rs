//! Numeric input parsing and display rounding.
//!
//! Cost and volume fields arrive as user-entered text. In lenient mode a
//! value that fails to parse is read up to its leading number, or becomes
//! zero when it has none, so the calculators stay total; in strict mode the
//! same input is reported as a `FieldInvalid` error. Amounts beyond
//! `MAX_INPUT_AMOUNT` are rejected in both modes.

use std::str::FromStr;

use log::warn;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_INPUT_AMOUNT;
use crate::errors::{Error, Result, ValidationError};

/// How numeric text fields are handled when they fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Unparsable values are substituted with zero.
    #[default]
    Lenient,
    /// Unparsable values are rejected.
    Strict,
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Reads the longest numeric prefix of `raw`, so `"4.00 USD"` reads as 4 and
/// `"500 units"` as 500. Text that does not start with a number yields `None`.
fn leading_number(raw: &str) -> Option<Decimal> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .unwrap_or(&[])
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let negative = bytes.first() == Some(&b'-');
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(sign_len);
    let mut end = sign_len + int_digits;
    let frac_digits = if bytes.get(end) == Some(&b'.') {
        digits_from(end + 1)
    } else {
        0
    };
    if int_digits + frac_digits == 0 {
        return None;
    }

    let mut number = String::new();
    if negative {
        number.push('-');
    }
    if int_digits == 0 {
        number.push('0');
    } else {
        number.push_str(&text[sign_len..end]);
    }
    if frac_digits > 0 {
        number.push_str(&text[end..end + 1 + frac_digits]);
        end += 1 + frac_digits;
    } else if bytes.get(end) == Some(&b'.') {
        end += 1;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_negative = bytes.get(end + 1) == Some(&b'-');
        let exp_sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + exp_sign_len;
        let exp_digits = digits_from(exp_start);
        if exp_digits > 0 {
            number.push('e');
            if exp_negative {
                number.push('-');
            }
            number.push_str(&text[exp_start..exp_start + exp_digits]);
        }
    }

    parse_decimal(&number)
}

fn invalid(field: &str, raw: &str, mode: ParseMode) -> Result<()> {
    match mode {
        ParseMode::Lenient => {
            warn!(
                "Field '{}' has unparsable value '{}', substituting 0",
                field, raw
            );
            Ok(())
        }
        ParseMode::Strict => Err(ValidationError::FieldInvalid {
            field: field.to_string(),
            value: raw.to_string(),
        }
        .into()),
    }
}

/// Reads `raw` as a number. Lenient mode falls back to its leading number.
fn read_number(field: &str, raw: &str, mode: ParseMode) -> Option<Decimal> {
    parse_decimal(raw).or_else(|| match mode {
        ParseMode::Lenient => leading_number(raw).inspect(|value| {
            warn!(
                "Field '{}' value '{}' read as its leading number {}",
                field, raw, value
            )
        }),
        ParseMode::Strict => None,
    })
}

/// Rejects amounts whose magnitude exceeds [`MAX_INPUT_AMOUNT`], in every mode.
pub fn check_amount(field: &str, value: Decimal) -> Result<Decimal> {
    if value.abs() > MAX_INPUT_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(value)
}

/// Parses a currency or rate amount.
///
/// Blank input counts as zero in both modes; it is what an untouched form
/// field holds.
pub fn parse_amount(field: &str, raw: &str, mode: ParseMode) -> Result<Decimal> {
    if raw.trim().is_empty() {
        return Ok(Decimal::ZERO);
    }
    match read_number(field, raw, mode) {
        Some(value) => check_amount(field, value),
        None => invalid(field, raw, mode).map(|_| Decimal::ZERO),
    }
}

/// Parses a monthly unit volume. Fractional volumes are truncated to whole units.
pub fn parse_units(field: &str, raw: &str, mode: ParseMode) -> Result<u32> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    match read_number(field, raw, mode) {
        Some(value) => units_from_decimal(field, value, mode),
        None => invalid(field, raw, mode).map(|_| 0),
    }
}

/// Converts an already numeric volume; negative or oversized volumes are
/// invalid under `mode`.
pub fn units_from_decimal(field: &str, value: Decimal, mode: ParseMode) -> Result<u32> {
    match Some(value)
        .filter(|v| !v.is_sign_negative())
        .and_then(|v| v.trunc().to_u32())
    {
        Some(units) => Ok(units),
        None => invalid(field, &value.to_string(), mode).map(|_| 0),
    }
}

/// Rounds to the nearest whole currency unit, halves rounding up
/// (`round(2.5) == 3`, `round(-2.5) == -2`).
pub fn round_to_whole(value: Decimal) -> Decimal {
    value
        .checked_add(dec!(0.5))
        .map(|v| v.floor())
        .unwrap_or(value)
}

/// Turns an unrepresentable intermediate into an `Overflow` error naming `what`.
pub fn checked(value: Option<Decimal>, what: &str) -> Result<Decimal> {
    value.ok_or_else(|| Error::Overflow(what.to_string()))
}
