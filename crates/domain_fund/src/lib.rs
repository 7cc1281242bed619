//! Fund Domain
//!
//! Fund records tracked by the dashboard and the CRUD service over them.
//!
//! # Key Concepts
//!
//! - **Fund**: an investment vehicle with a value, a performance figure and a
//!   risk level
//! - **FundDraft**: the caller-supplied fields of a fund, validated before
//!   they touch storage
//! - **Risk warning**: a fund rated `High` or `VeryHigh`
//!
//! # Precision
//!
//! Values are currency amounts and performance is a percentage; both are
//! stored with 2 decimal places:
//! - Value: 1250000.456 → 1250000.46
//! - Performance: 7.125 → 7.12 (midpoints round to even)

pub mod fund;
pub mod ports;
pub mod services;
pub mod error;

pub use fund::{Fund, FundDraft, RiskLevel, MAX_FUND_VALUE, MAX_NAME_LENGTH, MAX_PERFORMANCE};
pub use ports::{FundPort, FundQuery};
pub use services::FundService;
pub use error::FundError;

use rust_decimal::Decimal;

/// Decimal places kept for fund values
pub const CURRENCY_PRECISION: u32 = 2;

/// Decimal places kept for performance percentages
pub const PERCENT_PRECISION: u32 = 2;

/// Rounds a monetary amount to currency precision with a fixed scale
///
/// # Example
///
/// ```rust
/// use domain_fund::round_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_currency(dec!(1000)).to_string(), "1000.00");
/// assert_eq!(round_currency(dec!(10.005)).to_string(), "10.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    with_scale(value, CURRENCY_PRECISION)
}

/// Rounds a percentage to the stored precision with a fixed scale
pub fn round_percent(value: Decimal) -> Decimal {
    with_scale(value, PERCENT_PRECISION)
}

fn with_scale(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp(dp);
    rounded.rescale(dp);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_uses_bankers_rounding() {
        assert_eq!(round_currency(dec!(10.005)), dec!(10.00));
        assert_eq!(round_currency(dec!(10.015)), dec!(10.02));
    }

    #[test]
    fn test_round_percent_fixes_scale() {
        assert_eq!(round_percent(dec!(7)).to_string(), "7.00");
        assert_eq!(round_percent(dec!(-3.14159)).to_string(), "-3.14");
    }
}
