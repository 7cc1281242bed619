//! Custom Test Assertions
//!
//! Assertion helpers for domain types with messages that name the
//! offending field.

use rust_decimal::Decimal;

use domain_fund::{Fund, FundDraft};

/// Asserts that two decimals are equal within a tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={actual}, expected={expected}, diff={diff}, tolerance={tolerance}"
    );
}

/// Asserts that a fund carries the normalized fields of a draft
pub fn assert_fund_matches_draft(fund: &Fund, draft: &FundDraft) {
    let expected = draft.clone().validated().expect("draft must be valid");
    assert_eq!(fund.name, expected.name, "name mismatch for fund {}", fund.id);
    assert_eq!(fund.value, expected.value, "value mismatch for fund {}", fund.id);
    assert_eq!(
        fund.performance, expected.performance,
        "performance mismatch for fund {}",
        fund.id
    );
    assert_eq!(
        fund.risk_level, expected.risk_level,
        "risk level mismatch for fund {}",
        fund.id
    );
}

/// Asserts that funds are ordered by name, then id
pub fn assert_sorted_by_name(funds: &[Fund]) {
    for pair in funds.windows(2) {
        assert!(
            (&pair[0].name, pair[0].id) <= (&pair[1].name, pair[1].id),
            "funds out of order: '{}' before '{}'",
            pair[0].name,
            pair[1].name
        );
    }
}
