//! Property-Based Test Generators
//!
//! Proptest strategies producing data that satisfies the fund invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_fund::{Fund, FundDraft, RiskLevel};

/// Strategy for risk levels
pub fn risk_level_strategy() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
        Just(RiskLevel::VeryHigh),
    ]
}

/// Strategy for non-negative fund values with 2 dp, up to one billion
pub fn fund_value_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for performance percentages in `-100.00..=500.00`
pub fn performance_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000i64..=50_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for fund names, 1 to 60 visible characters
pub fn fund_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9 ]{0,58}[a-z0-9]"
}

/// Strategy for valid fund drafts
pub fn fund_draft_strategy() -> impl Strategy<Value = FundDraft> {
    (
        fund_name_strategy(),
        fund_value_strategy(),
        performance_strategy(),
        risk_level_strategy(),
    )
        .prop_map(|(name, value, performance, risk)| FundDraft::new(name, value, performance, risk))
}

/// Strategy for persisted-looking funds
pub fn fund_strategy() -> impl Strategy<Value = Fund> {
    fund_draft_strategy().prop_map(|draft| Fund::create(draft).expect("strategy yields valid drafts"))
}

/// Strategy for a collection of up to `max` funds
pub fn funds_strategy(max: usize) -> impl Strategy<Value = Vec<Fund>> {
    prop::collection::vec(fund_strategy(), 0..=max)
}
