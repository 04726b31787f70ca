//! Pure decimal helpers - no I/O, no canister state
//! All functions here must be deterministic and side-effect free

use rust_decimal::Decimal;
use std::str::FromStr;

use super::errors::{CalculationError, Result};

/// Parse a sanitized amount string into a Decimal
///
/// The sanitizer guarantees digits with at most one dot, but it legally
/// emits forms the Decimal parser rejects: ".5" (no integer part) and
/// "5." (trailing dot). Both are normalized here rather than widened in
/// the sanitizer, so the display layer still echoes what the user typed.
///
/// Anything else that fails to parse (a malformed value that bypassed
/// sanitization) is an InvalidAmount error for the caller to absorb.
pub fn parse_decimal(raw: &str) -> Result<Decimal> {
    let trimmed = raw.strip_suffix('.').unwrap_or(raw);
    if trimmed.is_empty() {
        return Err(CalculationError::InvalidAmount {
            value: raw.to_string(),
        }
        .into());
    }
    let candidate = if trimmed.starts_with('.') {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    };
    Decimal::from_str(&candidate).map_err(|_| {
        CalculationError::InvalidAmount {
            value: raw.to_string(),
        }
        .into()
    })
}

/// Checked multiply, with the offending operation in the error
pub fn multiply(a: Decimal, b: Decimal, operation: &str) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| {
        CalculationError::Overflow {
            operation: operation.to_string(),
        }
        .into()
    })
}

/// Checked divide; division by zero is an explicit error, never a panic
pub fn divide(numerator: Decimal, denominator: Decimal, operation: &str) -> Result<Decimal> {
    if denominator.is_zero() {
        return Err(CalculationError::DivisionByZero {
            operation: operation.to_string(),
        }
        .into());
    }
    numerator.checked_div(denominator).ok_or_else(|| {
        CalculationError::Overflow {
            operation: operation.to_string(),
        }
        .into()
    })
}

/// Length of the fractional segment (between the first dot and any
/// second one), 0 when there is no dot
pub fn fraction_digits(value: &str) -> usize {
    value.split('.').nth(1).map(|frac| frac.len()).unwrap_or(0)
}
