//! Swap quote computation
//!
//! All arithmetic runs at full Decimal precision; rounding to display
//! decimals is 5_INFORMATIONAL's job. `compute_quote` is the Result-typed
//! core - callers that care can tell a missing price from a computed zero.
//! `quote` is the total wrapper the endpoints use: any fault degrades to
//! the zero quote instead of propagating.

use num_traits::Zero;
use rust_decimal::Decimal;

use crate::infrastructure::constants::{FEE_PERCENT, FIXED_COMMISSION, PERCENT_SCALE};
use crate::infrastructure::errors::{CalculationError, Result};
use crate::infrastructure::math::{divide, multiply, parse_decimal};
use crate::types::prices::PriceMap;
use crate::types::quote::Quote;

/// Fee schedule applied to every quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeParameters {
    /// Proportional fee on the output amount
    pub fee_percent: Decimal,
    /// Fixed commission in quote currency, charged regardless of size
    pub fixed_commission: Decimal,
}

impl Default for FeeParameters {
    fn default() -> Self {
        Self {
            fee_percent: FEE_PERCENT,
            fixed_commission: FIXED_COMMISSION,
        }
    }
}

/// Compute a full-precision quote, or say exactly why one cannot be made
///
/// The rate is deliberately `to_price / from_price`. For USD-quoted
/// tokens the economically expected conversion would be the inverse;
/// changing it would change every displayed figure the UI has shipped
/// with, so it stays as-is (see DESIGN.md).
///
/// Errors:
/// - MissingPrice / NonPositivePrice: the pair cannot be priced
/// - InvalidAmount: a malformed amount bypassed sanitization
/// - DivisionByZero / Overflow: arithmetic faults
pub fn compute_quote(
    prices: &PriceMap,
    from_token: &str,
    to_token: &str,
    from_amount: &str,
    slippage_percent: Decimal,
    fees: &FeeParameters,
) -> Result<Quote> {
    let from_price = prices
        .price_of(from_token)
        .ok_or_else(|| CalculationError::MissingPrice {
            token: from_token.to_string(),
        })?;
    let to_price = prices
        .price_of(to_token)
        .ok_or_else(|| CalculationError::MissingPrice {
            token: to_token.to_string(),
        })?;

    ensure_positive(from_token, from_price)?;
    ensure_positive(to_token, to_price)?;

    let amount = parse_decimal(from_amount)?;

    let rate = divide(to_price, from_price, "to_price / from_price")?;
    let output_amount = multiply(amount, rate, "from_amount * rate")?;

    let slippage_fraction = divide(slippage_percent, PERCENT_SCALE, "slippage_percent / 100")?;
    let slippage_keep = checked_sub(Decimal::ONE, slippage_fraction, "1 - slippage")?;
    let min_received = multiply(output_amount, slippage_keep, "output * (1 - slippage)")?;

    let fee_amount = multiply(output_amount, fees.fee_percent, "output * fee_percent")?;
    let fee_keep = checked_sub(Decimal::ONE, fees.fee_percent, "1 - fee_percent")?;
    let total_after_fees = checked_sub(
        multiply(output_amount, fee_keep, "output * (1 - fee_percent)")?,
        fees.fixed_commission,
        "total - commission",
    )?;

    Ok(Quote {
        rate,
        output_amount,
        fee_amount,
        min_received,
        total_after_fees,
    })
}

/// Total quote: degrades every fault to the zero quote
///
/// The zero quote is not all-zero - the fixed commission still applies,
/// so total_after_fees comes back negative. Callers wanting to know
/// whether a zero quote is meaningful check the price map themselves.
pub fn quote(
    prices: &PriceMap,
    from_token: &str,
    to_token: &str,
    from_amount: &str,
    slippage_percent: Decimal,
    fees: &FeeParameters,
) -> Quote {
    match compute_quote(
        prices,
        from_token,
        to_token,
        from_amount,
        slippage_percent,
        fees,
    ) {
        Ok(q) => q,
        Err(e) => {
            ic_cdk::println!("⚠️ Quote degraded to zero: {}", e);
            Quote::degraded(fees.fixed_commission)
        }
    }
}

fn ensure_positive(token: &str, price: Decimal) -> Result<()> {
    if price.is_zero() || price < Decimal::ZERO {
        return Err(CalculationError::NonPositivePrice {
            token: token.to_string(),
            price: price.to_string(),
        }
        .into());
    }
    Ok(())
}

fn checked_sub(a: Decimal, b: Decimal, operation: &str) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(|| {
        CalculationError::Overflow {
            operation: operation.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn price_map(entries: &[(&str, Decimal)]) -> PriceMap {
        let mut map = PriceMap::new();
        for (token, price) in entries {
            map.insert_first(token.to_string(), *price);
        }
        map
    }

    #[test]
    fn test_rate_is_to_over_from() {
        let prices = price_map(&[("ETH", dec!(2000)), ("USDC", dec!(1))]);
        let q = compute_quote(&prices, "ETH", "USDC", "1", dec!(0), &FeeParameters::default())
            .unwrap();
        assert_eq!(q.rate, dec!(0.0005));
        assert_eq!(q.output_amount, dec!(0.0005));
    }

    #[test]
    fn test_output_is_exact_product() {
        let prices = price_map(&[("A", dec!(3)), ("B", dec!(7))]);
        let q = compute_quote(&prices, "A", "B", "1.5", dec!(0), &FeeParameters::default())
            .unwrap();
        // 7/3 is a repeating decimal; output must equal amount * rate exactly
        assert_eq!(q.output_amount, q.rate * dec!(1.5));
    }

    #[test]
    fn test_zero_amount_still_quotes_rate() {
        let prices = price_map(&[("ETH", dec!(2000)), ("USDC", dec!(1))]);
        let q = compute_quote(&prices, "ETH", "USDC", "0", dec!(1), &FeeParameters::default())
            .unwrap();
        assert_eq!(q.rate, dec!(0.0005));
        assert!(q.output_amount.is_zero());
        assert!(q.fee_amount.is_zero());
        assert_eq!(q.total_after_fees, dec!(-2.48));
    }

    #[test]
    fn test_missing_price_is_distinguishable() {
        let prices = price_map(&[("ETH", dec!(2000))]);
        let result = compute_quote(
            &prices,
            "ETH",
            "USDC",
            "1",
            dec!(1),
            &FeeParameters::default(),
        );
        assert!(matches!(
            result,
            Err(crate::infrastructure::SwapError::Calculation(
                CalculationError::MissingPrice { .. }
            ))
        ));
    }

    #[test]
    fn test_zero_price_is_distinguishable() {
        let prices = price_map(&[("ETH", dec!(0)), ("USDC", dec!(1))]);
        let result = compute_quote(
            &prices,
            "ETH",
            "USDC",
            "1",
            dec!(1),
            &FeeParameters::default(),
        );
        assert!(matches!(
            result,
            Err(crate::infrastructure::SwapError::Calculation(
                CalculationError::NonPositivePrice { .. }
            ))
        ));
    }

    #[test]
    fn test_degraded_quote_keeps_commission() {
        let prices = PriceMap::new();
        let q = quote(&prices, "ETH", "USDC", "5", dec!(1), &FeeParameters::default());
        assert!(q.rate.is_zero());
        assert!(q.output_amount.is_zero());
        assert!(q.fee_amount.is_zero());
        assert!(q.min_received.is_zero());
        assert_eq!(q.total_after_fees, dec!(-2.48));
    }

    #[test]
    fn test_malformed_amount_degrades() {
        let prices = price_map(&[("ETH", dec!(2000)), ("USDC", dec!(1))]);
        let q = quote(&prices, "ETH", "USDC", "not-a-number", dec!(1), &FeeParameters::default());
        assert!(q.output_amount.is_zero());
        assert_eq!(q.total_after_fees, dec!(-2.48));
    }

    #[test]
    fn test_min_received_never_exceeds_output() {
        let prices = price_map(&[("ETH", dec!(2000)), ("USDC", dec!(1))]);
        let fees = FeeParameters::default();
        for slippage in [dec!(0), dec!(0.5), dec!(1), dec!(5), dec!(100)] {
            let q = compute_quote(&prices, "USDC", "ETH", "100", slippage, &fees).unwrap();
            assert!(q.min_received <= q.output_amount, "slippage {}", slippage);
            if slippage.is_zero() {
                assert_eq!(q.min_received, q.output_amount);
            } else {
                assert!(q.min_received < q.output_amount);
            }
        }
    }

    #[test]
    fn test_fee_and_total_formulas() {
        let prices = price_map(&[("USDC", dec!(1)), ("DAI", dec!(1))]);
        let q = compute_quote(&prices, "USDC", "DAI", "1000", dec!(1), &FeeParameters::default())
            .unwrap();
        assert_eq!(q.output_amount, dec!(1000));
        assert_eq!(q.fee_amount, dec!(3.000)); // 0.3% of 1000
        assert_eq!(q.min_received, dec!(990.00)); // 1% slippage
        assert_eq!(q.total_after_fees, dec!(994.52)); // 997 - 2.48
    }

    #[test]
    fn test_small_trade_goes_negative_unclamped() {
        let prices = price_map(&[("USDC", dec!(1)), ("DAI", dec!(1))]);
        let q = compute_quote(&prices, "USDC", "DAI", "1", dec!(1), &FeeParameters::default())
            .unwrap();
        assert!(q.total_after_fees < Decimal::ZERO);
    }

    #[test]
    fn test_custom_fee_parameters() {
        let prices = price_map(&[("USDC", dec!(1)), ("DAI", dec!(1))]);
        let fees = FeeParameters {
            fee_percent: dec!(0.01),
            fixed_commission: dec!(0),
        };
        let q = compute_quote(&prices, "USDC", "DAI", "100", dec!(0), &fees).unwrap();
        assert_eq!(q.fee_amount, dec!(1.00));
        assert_eq!(q.total_after_fees, dec!(99.00));
    }
}
