//! Swap form validation
//!
//! Structural and range checks on the amount and slippage strings, before
//! either reaches the engine. Purely text-based: the price map and token
//! pair are never consulted. Returns the violated rules as field-level
//! messages (empty list = valid) and never panics.

use candid::CandidType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::infrastructure::constants::{MAX_AMOUNT_DECIMALS, MAX_SLIPPAGE_DECIMALS};
use crate::infrastructure::errors::ValidationError;
use crate::infrastructure::math::{fraction_digits, parse_decimal};

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FromAmount,
    Slippage,
}

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl From<ValidationError> for FieldError {
    fn from(rule: ValidationError) -> Self {
        let (field, message) = match rule {
            ValidationError::AmountNotPositive { .. } => {
                (Field::FromAmount, "Amount must be greater than 0")
            }
            ValidationError::AmountTooManyDecimals { .. } => {
                (Field::FromAmount, "Max 18 decimals allowed")
            }
            ValidationError::SlippageNotNumeric { .. } => {
                (Field::Slippage, "Must be a valid positive number")
            }
            ValidationError::SlippageTooManyDecimals { .. } => {
                (Field::Slippage, "Max 2 decimals for slippage")
            }
        };
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validate the two form fields, collecting every violated rule
///
/// Amount: `digits(.digits)?` shape with value strictly greater than 0,
/// and at most 18 fractional digits.
/// Slippage: same shape with value at least 0, at most 2 fractional
/// digits. Each rule reports independently, like the form schema it
/// mirrors, so one field can carry two messages at once.
pub fn validate_swap_inputs(from_amount: &str, slippage: &str) -> Vec<FieldError> {
    violated_rules(from_amount, slippage)
        .into_iter()
        .map(FieldError::from)
        .collect()
}

fn violated_rules(from_amount: &str, slippage: &str) -> Vec<ValidationError> {
    let mut rules = Vec::new();

    let amount_positive = matches_decimal_shape(from_amount)
        && numeric_value(from_amount).is_some_and(|v| v > Decimal::ZERO);
    if !amount_positive {
        rules.push(ValidationError::AmountNotPositive {
            value: from_amount.to_string(),
        });
    }
    if fraction_digits(from_amount) > MAX_AMOUNT_DECIMALS {
        rules.push(ValidationError::AmountTooManyDecimals {
            maximum: MAX_AMOUNT_DECIMALS,
        });
    }

    let slippage_non_negative = matches_decimal_shape(slippage)
        && numeric_value(slippage).is_some_and(|v| v >= Decimal::ZERO);
    if !slippage_non_negative {
        rules.push(ValidationError::SlippageNotNumeric {
            value: slippage.to_string(),
        });
    }
    if fraction_digits(slippage) > MAX_SLIPPAGE_DECIMALS {
        rules.push(ValidationError::SlippageTooManyDecimals {
            maximum: MAX_SLIPPAGE_DECIMALS,
        });
    }

    rules
}

/// `digits, optional dot, optional digits` - empty string and lone dot
/// both match the shape (their value check decides)
fn matches_decimal_shape(value: &str) -> bool {
    let mut dots = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => {}
            '.' => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
            }
            _ => return false,
        }
    }
    true
}

/// Numeric value the way the form coerces it: the empty string is 0,
/// an unparseable string (a lone dot) is no value at all
fn numeric_value(value: &str) -> Option<Decimal> {
    if value.is_empty() {
        return Some(Decimal::ZERO);
    }
    parse_decimal(value).ok()
}
