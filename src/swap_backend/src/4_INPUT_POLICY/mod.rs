//! Input Policy - Sanitizing and validating user-entered text
//! Everything the form sends passes through here before the engine sees it

pub mod sanitize;
pub mod validate;

pub use sanitize::sanitize_amount;
pub use validate::{validate_swap_inputs, Field, FieldError};
