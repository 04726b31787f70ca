use candid::CandidType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw price feed row, exactly as the JSON price source emits it
///
/// The price arrives as a binary float because that is what the feed
/// serves; it is converted to Decimal the moment it enters the core
/// (see 2_PRICE_DATA) and never used as f64 in any computation.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone)]
pub struct PriceRecord {
    pub currency: String,
    pub date: String,
    pub price: f64,
}

/// One entry of a built price map, for the candid interface
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub token: String,
    pub price: String, // Decimal rendered as text, full precision
}

/// Uppercased symbol -> Decimal price, preserving first-occurrence order
///
/// Invariants:
/// - at most one entry per uppercased symbol
/// - `order` lists symbols in the order their first record appeared;
///   the UI derives its token selector from that order
/// - rebuilt from scratch on every snapshot, never mutated after build
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceMap {
    prices: HashMap<String, Decimal>,
    order: Vec<String>,
}

impl PriceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the symbol is already present (first-write-wins).
    /// Returns whether the entry was inserted.
    pub fn insert_first(&mut self, token: String, price: Decimal) -> bool {
        if self.prices.contains_key(&token) {
            return false;
        }
        self.order.push(token.clone());
        self.prices.insert(token, price);
        true
    }

    pub fn price_of(&self, token: &str) -> Option<Decimal> {
        self.prices.get(token).copied()
    }

    /// Symbols in first-occurrence order
    pub fn tokens(&self) -> &[String] {
        &self.order
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.order
            .iter()
            .map(move |t| (t.as_str(), self.prices[t]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
