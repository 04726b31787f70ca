//! Core constants for the swap quote engine

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Proportional fee taken from the output amount (0.3%)
pub const FEE_PERCENT: Decimal = dec!(0.003);

/// Fixed commission charged per swap, in quote currency
pub const FIXED_COMMISSION: Decimal = dec!(2.48);

/// Slippage is supplied as a percentage; divide by this to get a fraction
pub const PERCENT_SCALE: Decimal = dec!(100);

/// Fractional digits shown for amounts in the UI
pub const DISPLAY_DECIMALS: u32 = 6;

/// Fractional digits shown for the fixed commission
pub const COMMISSION_DISPLAY_DECIMALS: u32 = 2;

/// Maximum fractional digits accepted for the swap amount
pub const MAX_AMOUNT_DECIMALS: usize = 18;

/// Maximum fractional digits accepted for slippage
pub const MAX_SLIPPAGE_DECIMALS: usize = 2;
