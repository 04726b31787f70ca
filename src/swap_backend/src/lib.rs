//! Swap Backend - Currency-swap quote canister with numbered zones
//!
//! Architecture:
//! 1_QUOTE_ENGINE - Rate, output, fees, minimum received (highest scrutiny)
//! 2_PRICE_DATA - Price snapshot normalization
//! 3_TOKEN_SELECTION - Default pair and collision policy
//! 4_INPUT_POLICY - Keystroke sanitizing and form validation
//! 5_INFORMATIONAL - Display formatting
//! 6_INFRASTRUCTURE - Errors, constants, decimal math
//!
//! Every endpoint is a pure query over caller-supplied data: the price
//! snapshot, the pair, and the form text all arrive as arguments and
//! nothing is cached or persisted between calls.

// Import numbered modules with explicit paths
#[path = "1_QUOTE_ENGINE/mod.rs"]
mod quote_engine_1;
use quote_engine_1 as _1_QUOTE_ENGINE;

#[path = "2_PRICE_DATA/mod.rs"]
mod price_data_2;
use price_data_2 as _2_PRICE_DATA;

#[path = "3_TOKEN_SELECTION/mod.rs"]
mod token_selection_3;
use token_selection_3 as _3_TOKEN_SELECTION;

#[path = "4_INPUT_POLICY/mod.rs"]
mod input_policy_4;
use input_policy_4 as _4_INPUT_POLICY;

#[path = "5_INFORMATIONAL/mod.rs"]
mod informational_5;
use informational_5 as _5_INFORMATIONAL;

#[path = "6_INFRASTRUCTURE/mod.rs"]
mod infrastructure_6;
use infrastructure_6 as infrastructure;

mod types;

use candid::candid_method;
use ic_cdk::{init, query};
use rust_decimal::Decimal;

use crate::_1_QUOTE_ENGINE::engine::FeeParameters;
use crate::_4_INPUT_POLICY::validate::FieldError;
use crate::types::common::{FeeInfo, HealthStatus};
use crate::types::prices::{PriceEntry, PriceRecord};
use crate::types::quote::{QuoteReply, QuoteRequest};
use crate::types::tokens::{normalize_symbol, TokenPair};

// ===== PUBLIC API =====

/// Compute a quote from a price snapshot and raw form text
///
/// Sanitizes the amount and slippage, builds the price map, runs the
/// engine, and returns the display-formatted view. Always answers with a
/// well-formed reply; a pair that cannot be priced comes back as the
/// zero quote (commission still applied).
#[query]
#[candid_method(query)]
fn get_quote(request: QuoteRequest) -> QuoteReply {
    let from_token = normalize_symbol(&request.from_token);
    let to_token = normalize_symbol(&request.to_token);

    let amount = _4_INPUT_POLICY::sanitize::sanitize_amount(&request.from_amount);
    let slippage_text = _4_INPUT_POLICY::sanitize::sanitize_amount(&request.slippage_percent);
    let slippage = infrastructure::math::parse_decimal(&slippage_text).unwrap_or(Decimal::ZERO);

    let prices = _2_PRICE_DATA::price_map::build_price_map(&request.prices);
    let fees = FeeParameters::default();

    let quote = _1_QUOTE_ENGINE::engine::quote(
        &prices,
        &from_token,
        &to_token,
        &amount,
        slippage,
        &fees,
    );

    ic_cdk::println!(
        "CALC: quote {} {} -> {} (rate {})",
        amount,
        from_token,
        to_token,
        quote.rate
    );

    let to_price = prices.price_of(&to_token).unwrap_or(Decimal::ZERO);
    _5_INFORMATIONAL::display::build_quote_reply(
        &from_token,
        &to_token,
        &amount,
        &quote,
        to_price,
        &fees,
    )
}

/// Normalize raw amount keystrokes into a canonical decimal string
#[query]
#[candid_method(query)]
fn sanitize_amount(value: String) -> String {
    _4_INPUT_POLICY::sanitize::sanitize_amount(&value)
}

/// Validate the form fields; an empty list means both are acceptable
#[query]
#[candid_method(query)]
fn validate_swap_inputs(from_amount: String, slippage: String) -> Vec<FieldError> {
    _4_INPUT_POLICY::validate::validate_swap_inputs(&from_amount, &slippage)
}

/// Build the deduplicated price map from a raw snapshot
#[query]
#[candid_method(query)]
fn get_price_map(records: Vec<PriceRecord>) -> Vec<PriceEntry> {
    let map = _2_PRICE_DATA::price_map::build_price_map(&records);
    map.iter()
        .map(|(token, price)| PriceEntry {
            token: token.to_string(),
            price: price.to_string(),
        })
        .collect()
}

/// Tokens with a known price, in first-occurrence order
#[query]
#[candid_method(query)]
fn get_available_tokens(records: Vec<PriceRecord>) -> Vec<String> {
    _2_PRICE_DATA::price_map::build_price_map(&records)
        .tokens()
        .to_vec()
}

/// Default (from, to) pair for a fresh form
#[query]
#[candid_method(query)]
fn get_default_pair(tokens: Vec<String>) -> TokenPair {
    let from = _3_TOKEN_SELECTION::selection::default_from_token(&tokens);
    let to = _3_TOKEN_SELECTION::selection::default_to_token(&tokens, &from);
    TokenPair { from, to }
}

/// Keep the pair sides distinct after a selector change or side swap
#[query]
#[candid_method(query)]
fn resolve_duplicate_token(tokens: Vec<String>, selected: String, other: String) -> String {
    _3_TOKEN_SELECTION::selection::resolve_duplicate_token(&tokens, &selected, &other)
}

/// Fee schedule, so the UI can label its fee rows without hardcoding
#[query]
#[candid_method(query)]
fn get_fee_parameters() -> FeeInfo {
    let fees = FeeParameters::default();
    FeeInfo {
        fee_percent: fees.fee_percent.to_string(),
        fixed_commission: fees.fixed_commission.to_string(),
    }
}

#[query]
#[candid_method(query)]
fn get_health_status() -> HealthStatus {
    HealthStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        fee_percent: infrastructure::constants::FEE_PERCENT.to_string(),
        fixed_commission: infrastructure::constants::FIXED_COMMISSION.to_string(),
        display_decimals: infrastructure::constants::DISPLAY_DECIMALS,
    }
}

// ===== INITIALIZATION =====

#[init]
fn init() {
    ic_cdk::println!("===================================");
    ic_cdk::println!("Swap Backend Initialized");
    ic_cdk::println!("Architecture: Numbered Zones");
    ic_cdk::println!("Mode: Stateless quote queries only");
    ic_cdk::println!("===================================");
}

// ===== CANDID EXPORT =====

ic_cdk::export_candid!();
