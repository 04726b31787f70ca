//! Quote Engine - Rate, output, fees, minimum received
//! The only zone doing money math; everything it consumes is pre-sanitized

pub mod engine;

pub use engine::{compute_quote, quote, FeeParameters};
