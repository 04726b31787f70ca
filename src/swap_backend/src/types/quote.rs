use candid::CandidType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::prices::PriceRecord;

/// Full-precision quote, internal only
///
/// Recomputed on every input change and never persisted. Rounding to
/// display decimals happens in 5_INFORMATIONAL, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub rate: Decimal,
    pub output_amount: Decimal,
    pub fee_amount: Decimal,
    pub min_received: Decimal,
    pub total_after_fees: Decimal,
}

impl Quote {
    /// The quote every fault degrades to: zero output fed through the fee
    /// formula, so total_after_fees carries the negative fixed commission.
    pub fn degraded(fixed_commission: Decimal) -> Self {
        Self {
            rate: Decimal::ZERO,
            output_amount: Decimal::ZERO,
            fee_amount: Decimal::ZERO,
            min_received: Decimal::ZERO,
            total_after_fees: -fixed_commission,
        }
    }
}

/// Everything the frontend knows, passed by value (no ambient state)
#[derive(CandidType, Deserialize, Serialize, Debug, Clone)]
pub struct QuoteRequest {
    pub prices: Vec<PriceRecord>,
    pub from_token: String,
    pub to_token: String,
    /// Raw amount text; sanitized server-side before quoting
    pub from_amount: String,
    /// Raw slippage-percent text ("1" = 1%)
    pub slippage_percent: String,
}

/// Display-formatted quote for the UI collaborator
///
/// Amount fields are rendered to 6 fractional digits (commission to 2);
/// the `_usd` companions are the value multiplied by the to-token price,
/// matching the fiat row the swap page renders next to each figure.
/// Strings keep candid clients away from binary floats.
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QuoteReply {
    pub from_token: String,
    pub to_token: String,
    /// Sanitized amount echoed back for the input field
    pub from_amount: String,
    pub rate: String,
    /// Headline output: "0" when zero, otherwise trimmed to 6 decimals
    pub output_amount: String,
    pub min_received: String,
    pub min_received_usd: String,
    pub fee_amount: String,
    pub fee_amount_usd: String,
    pub commission_usd: String,
    pub total_after_fees: String,
    pub total_after_fees_usd: String,
}
