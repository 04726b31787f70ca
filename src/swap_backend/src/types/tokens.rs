use candid::CandidType;
use serde::{Deserialize, Serialize};

/// A (from, to) trading pair
///
/// 3_TOKEN_SELECTION keeps `from != to` whenever the available set has at
/// least two distinct symbols; the engine itself does not enforce it.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub from: String,
    pub to: String,
}

/// Symbols are compared and stored uppercased throughout the core
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("eth"), "ETH");
        assert_eq!(normalize_symbol("UsDc"), "USDC");
        assert_eq!(normalize_symbol(""), "");
    }
}
