//! Shared type definitions
//!
//! Wire types derive CandidType and travel over the candid interface;
//! the internal PriceMap and Quote stay Decimal-precise and never cross it.

pub mod common;
pub mod prices;
pub mod quote;
pub mod tokens;

pub use prices::{PriceEntry, PriceMap, PriceRecord};
pub use quote::{Quote, QuoteReply, QuoteRequest};
pub use tokens::TokenPair;
