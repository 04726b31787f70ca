//! Token pair selection policy
//!
//! Keeps the two sides of the pair from collapsing onto the same token:
//! after a side swap or a selector change, the other side is moved to the
//! first available alternative. All functions return the empty string when
//! no suitable token exists (fewer than two symbols available).

/// First token in order, or empty when the set is empty
pub fn default_from_token(tokens: &[String]) -> String {
    tokens.first().cloned().unwrap_or_default()
}

/// First token in order that differs from `from`, or empty
pub fn default_to_token(tokens: &[String], from: &str) -> String {
    tokens
        .iter()
        .find(|t| t.as_str() != from)
        .cloned()
        .unwrap_or_default()
}

/// Resolve a pair collision
///
/// If the two sides already differ, `other` stands. Otherwise the first
/// token differing from `selected` replaces it (empty when none exists).
pub fn resolve_duplicate_token(tokens: &[String], selected: &str, other: &str) -> String {
    if selected != other {
        return other.to_string();
    }
    tokens
        .iter()
        .find(|t| t.as_str() != selected)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_from_is_first() {
        assert_eq!(default_from_token(&tokens(&["ETH", "USDC", "DAI"])), "ETH");
        assert_eq!(default_from_token(&[]), "");
    }

    #[test]
    fn test_default_to_skips_from() {
        let available = tokens(&["ETH", "USDC", "DAI"]);
        assert_eq!(default_to_token(&available, "ETH"), "USDC");
        assert_eq!(default_to_token(&available, "USDC"), "ETH");
    }

    #[test]
    fn test_default_to_empty_when_no_alternative() {
        assert_eq!(default_to_token(&tokens(&["ETH"]), "ETH"), "");
        assert_eq!(default_to_token(&[], "ETH"), "");
    }

    #[test]
    fn test_resolve_keeps_distinct_other() {
        let available = tokens(&["ETH", "USDC", "DAI"]);
        assert_eq!(
            resolve_duplicate_token(&available, "ETH", "USDC"),
            "USDC"
        );
    }

    #[test]
    fn test_resolve_moves_collision_to_first_alternative() {
        let available = tokens(&["ETH", "USDC", "DAI"]);
        assert_eq!(resolve_duplicate_token(&available, "ETH", "ETH"), "USDC");
        assert_eq!(resolve_duplicate_token(&available, "USDC", "USDC"), "ETH");
    }

    #[test]
    fn test_resolve_never_returns_selected_with_alternative() {
        let available = tokens(&["ETH", "USDC", "DAI"]);
        for selected in &available {
            let resolved = resolve_duplicate_token(&available, selected, selected);
            assert_ne!(&resolved, selected);
            assert!(!resolved.is_empty());
        }
    }

    #[test]
    fn test_resolve_empty_when_only_member() {
        assert_eq!(resolve_duplicate_token(&tokens(&["ETH"]), "ETH", "ETH"), "");
    }
}
