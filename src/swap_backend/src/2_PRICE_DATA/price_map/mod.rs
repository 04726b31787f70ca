//! Price map construction
//!
//! The feed repeats symbols (same currency, different dates). The map keeps
//! the first occurrence and discards the rest - deliberately not "latest
//! wins": the date field is accepted on the wire and never consulted.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::types::prices::{PriceMap, PriceRecord};
use crate::types::tokens::normalize_symbol;

/// Build a price map from a raw snapshot
///
/// - keys are uppercased currency codes
/// - first record per key wins, regardless of date recency
/// - first-occurrence order is preserved (the UI token list depends on it)
/// - a malformed (empty) snapshot yields an empty map, never an error
///
/// Non-finite feed prices cannot come from JSON but can come over candid;
/// they map to price 0 so ordering is unaffected and the engine's
/// zero-price guard absorbs them.
pub fn build_price_map(records: &[PriceRecord]) -> PriceMap {
    let mut map = PriceMap::new();
    for record in records {
        let key = normalize_symbol(&record.currency);
        let price = Decimal::from_f64(record.price).unwrap_or(Decimal::ZERO);
        map.insert_first(key, price);
    }
    map
}
