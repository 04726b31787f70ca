//! Price Data - Snapshot normalization
//! Turns the raw feed list into the per-symbol price map

pub mod price_map;

pub use price_map::build_price_map;
