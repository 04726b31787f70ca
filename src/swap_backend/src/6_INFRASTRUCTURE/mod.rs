//! Infrastructure - Shared utilities and types
//! Foundation layer for all other modules

pub mod constants;
pub mod errors;
pub mod math;

// Re-export commonly used items
pub use constants::*;
pub use errors::{CalculationError, Result, SwapError, ValidationError};
pub use math::{divide, fraction_digits, multiply, parse_decimal};
