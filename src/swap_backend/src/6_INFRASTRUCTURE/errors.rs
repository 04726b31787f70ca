//! Error taxonomy for the swap backend
//!
//! Nothing here is fatal to a caller: validation failures surface as
//! field-level messages, and every calculation error is absorbed by the
//! quote engine's degrade path. The variants exist so internal callers can
//! distinguish "computed zero" from "inputs missing".

use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Result<T> = std::result::Result<T, SwapError>;

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum SwapError {
    Validation(ValidationError),
    Calculation(CalculationError),
    Other(String),
}

/// The four form rules, one variant each
///
/// 4_INPUT_POLICY turns these into the field-level messages the UI
/// renders; the variants keep the offending value for logs.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ValidationError {
    AmountNotPositive { value: String },
    AmountTooManyDecimals { maximum: usize },
    SlippageNotNumeric { value: String },
    SlippageTooManyDecimals { maximum: usize },
}

#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum CalculationError {
    DivisionByZero {
        operation: String,
    },
    Overflow {
        operation: String,
    },
    MissingPrice {
        token: String,
    },
    NonPositivePrice {
        token: String,
        price: String,
    },
    InvalidAmount {
        value: String,
    },
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::Validation(e) => write!(f, "Validation error: {}", e),
            SwapError::Calculation(e) => write!(f, "Calculation error: {}", e),
            SwapError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::AmountNotPositive { value } => {
                write!(f, "Amount must be positive, got '{}'", value)
            }
            ValidationError::AmountTooManyDecimals { maximum } => {
                write!(f, "Amount allows at most {} decimals", maximum)
            }
            ValidationError::SlippageNotNumeric { value } => {
                write!(f, "Slippage is not a non-negative number: '{}'", value)
            }
            ValidationError::SlippageTooManyDecimals { maximum } => {
                write!(f, "Slippage allows at most {} decimals", maximum)
            }
        }
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::DivisionByZero { operation } => {
                write!(f, "Division by zero in {}", operation)
            }
            CalculationError::Overflow { operation } => {
                write!(f, "Arithmetic overflow in {}", operation)
            }
            CalculationError::MissingPrice { token } => {
                write!(f, "No price available for {}", token)
            }
            CalculationError::NonPositivePrice { token, price } => {
                write!(f, "Price for {} is not positive: {}", token, price)
            }
            CalculationError::InvalidAmount { value } => {
                write!(f, "Amount '{}' is not a valid decimal", value)
            }
        }
    }
}

impl From<ValidationError> for SwapError {
    fn from(e: ValidationError) -> Self {
        SwapError::Validation(e)
    }
}

impl From<CalculationError> for SwapError {
    fn from(e: CalculationError) -> Self {
        SwapError::Calculation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = SwapError::Calculation(CalculationError::DivisionByZero {
            operation: "to_price / from_price".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Calculation error: Division by zero in to_price / from_price"
        );
    }

    #[test]
    fn test_from_sub_errors() {
        let err: SwapError = CalculationError::MissingPrice {
            token: "ETH".to_string(),
        }
        .into();
        assert!(matches!(err, SwapError::Calculation(_)));
    }
}
