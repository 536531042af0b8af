// decimal strings to the contract's fixed-point integers
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;


/// Decimals of the fixed-point representation expected on-chain
pub const WEIGHT_DECIMALS: u32 = 18;

const ONE: u128 = 10u128.pow(WEIGHT_DECIMALS);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    #[error("Malformed weight {weight:?}: {reason}")]
    Malformed { weight: String, reason: String },

    #[error("Negative weight: {0}")]
    Negative(String),

    #[error("Weight out of range: {0}")]
    Overflow(String),
}

/// Convert a decimal weight string to an 18-decimal fixed-point integer.
///
/// `Decimal` only validates the syntax; the digits themselves are read
/// straight into `u128`, so digits past the 18th decimal are truncated
/// without any intermediate rounding.
pub fn to_fixed_point(weight: &str) -> Result<u128, WeightError> {
    let trimmed = weight.trim();
    Decimal::from_str(trimmed).map_err(|e| WeightError::Malformed {
        weight: weight.to_string(),
        reason: e.to_string(),
    })?;

    let unsigned = trimmed.trim_start_matches(|c: char| c == '+' || c == '-');
    if trimmed.starts_with('-') {
        if unsigned.chars().any(|c| ('1'..='9').contains(&c)) {
            return Err(WeightError::Negative(weight.to_string()));
        }
        return Ok(0);
    }

    let (whole, fract) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let whole: String = whole.chars().filter(|c| *c != '_').collect();
    let fract: String = fract
        .chars()
        .filter(|c| *c != '_')
        .take(WEIGHT_DECIMALS as usize)
        .collect();

    let overflow = || WeightError::Overflow(weight.to_string());
    let whole_units = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| overflow())?
    };
    let fract_units = if fract.is_empty() {
        0
    } else {
        format!("{:0<width$}", fract, width = WEIGHT_DECIMALS as usize)
            .parse::<u128>()
            .map_err(|_| overflow())?
    };

    whole_units
        .checked_mul(ONE)
        .and_then(|units| units.checked_add(fract_units))
        .ok_or_else(overflow)
}

/// Render a fixed-point integer back as a decimal string (for display)
pub fn from_fixed_point(units: u128) -> String {
    let whole = units / ONE;
    let fract = units % ONE;
    if fract == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0width$}", fract, width = WEIGHT_DECIMALS as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
