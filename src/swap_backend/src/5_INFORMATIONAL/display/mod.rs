//! Display module - Quote formatting for UI
//!
//! Amounts render to 6 fractional digits, the fixed commission to 2,
//! both half-up the way the frontend's number library rounds. The
//! headline output amount is the exception: "0" when zero, otherwise
//! trimmed rather than padded.

use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::infrastructure::constants::{COMMISSION_DISPLAY_DECIMALS, DISPLAY_DECIMALS};
use crate::types::quote::{Quote, QuoteReply};
use crate::_1_QUOTE_ENGINE::engine::FeeParameters;

/// Fixed-width rendering: always exactly `decimals` fractional digits
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", decimals as usize, rounded)
}

/// Headline output rendering: "0" when zero, else at most 6 decimals
/// with trailing zeros trimmed
pub fn format_output(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    value
        .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Assemble the candid-facing view of a quote
///
/// `to_price` drives the fiat companions (value x to-token price); a
/// missing price values everything at 0, same as the quote itself.
pub fn build_quote_reply(
    from_token: &str,
    to_token: &str,
    sanitized_amount: &str,
    quote: &Quote,
    to_price: Decimal,
    fees: &FeeParameters,
) -> QuoteReply {
    let in_fiat = |value: Decimal| -> String {
        let fiat = value.checked_mul(to_price).unwrap_or(Decimal::ZERO);
        format_fixed(fiat, DISPLAY_DECIMALS)
    };

    QuoteReply {
        from_token: from_token.to_string(),
        to_token: to_token.to_string(),
        from_amount: sanitized_amount.to_string(),
        rate: format_fixed(quote.rate, DISPLAY_DECIMALS),
        output_amount: format_output(quote.output_amount),
        min_received: format_fixed(quote.min_received, DISPLAY_DECIMALS),
        min_received_usd: in_fiat(quote.min_received),
        fee_amount: format_fixed(quote.fee_amount, DISPLAY_DECIMALS),
        fee_amount_usd: in_fiat(quote.fee_amount),
        commission_usd: format_fixed(fees.fixed_commission, COMMISSION_DISPLAY_DECIMALS),
        total_after_fees: format_fixed(quote.total_after_fees, DISPLAY_DECIMALS),
        total_after_fees_usd: in_fiat(quote.total_after_fees),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_fixed_pads_and_rounds() {
        assert_eq!(format_fixed(dec!(0.0005), 6), "0.000500");
        assert_eq!(format_fixed(dec!(1), 6), "1.000000");
        assert_eq!(format_fixed(dec!(0.12345649), 6), "0.123456");
        assert_eq!(format_fixed(dec!(0.1234565), 6), "0.123457"); // half-up
        assert_eq!(format_fixed(dec!(2.48), 2), "2.48");
        assert_eq!(format_fixed(dec!(-2.48), 6), "-2.480000");
    }

    #[test]
    fn test_format_output_trims() {
        assert_eq!(format_output(dec!(0)), "0");
        assert_eq!(format_output(dec!(0.000000)), "0");
        assert_eq!(format_output(dec!(0.0005)), "0.0005");
        assert_eq!(format_output(dec!(7.000)), "7");
        assert_eq!(format_output(dec!(1.23456789)), "1.234568");
    }

    #[test]
    fn test_reply_carries_fiat_companions() {
        let q = Quote {
            rate: dec!(2),
            output_amount: dec!(10),
            fee_amount: dec!(0.03),
            min_received: dec!(9.9),
            total_after_fees: dec!(7.49),
        };
        let reply = build_quote_reply("USDC", "ETH", "5", &q, dec!(2000), &FeeParameters::default());
        assert_eq!(reply.output_amount, "10");
        assert_eq!(reply.min_received, "9.900000");
        assert_eq!(reply.min_received_usd, "19800.000000");
        assert_eq!(reply.commission_usd, "2.48");
        assert_eq!(reply.from_amount, "5");
    }

    #[test]
    fn test_reply_with_missing_to_price() {
        let q = Quote::degraded(dec!(2.48));
        let reply = build_quote_reply("ETH", "USDC", "5", &q, Decimal::ZERO, &FeeParameters::default());
        assert_eq!(reply.output_amount, "0");
        assert_eq!(reply.total_after_fees, "-2.480000");
        assert_eq!(reply.total_after_fees_usd, "0.000000");
    }
}
