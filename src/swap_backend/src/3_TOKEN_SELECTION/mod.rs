//! Token Selection - Default pair and collision policy

pub mod selection;

pub use selection::{default_from_token, default_to_token, resolve_duplicate_token};
