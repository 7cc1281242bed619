//! Per-fund risk scoring
//!
//! Score = base for the fund's risk level + volatility adjustment, where the
//! adjustment is half the absolute performance, floored and capped at 15.
//! The result is clamped to 0..=100.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::FundId;
use domain_fund::{Fund, RiskLevel};

/// Highest possible score
pub const MAX_SCORE: u8 = 100;

/// Cap on the volatility adjustment
pub const MAX_VOLATILITY_ADJUSTMENT: u8 = 15;

/// One contribution to a risk score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub name: String,
    pub contribution: u8,
    pub description: String,
}

/// Risk score for a single fund
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskScore {
    pub fund_id: FundId,
    pub fund_name: String,
    /// 0 (no risk) to 100
    pub score: u8,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
}

impl RiskScore {
    /// Scores a fund
    pub fn for_fund(fund: &Fund) -> Self {
        let base = base_score(fund.risk_level);
        let volatility = volatility_adjustment(fund.performance);

        Self {
            fund_id: fund.id,
            fund_name: fund.name.clone(),
            score: base.saturating_add(volatility).min(MAX_SCORE),
            level: fund.risk_level,
            factors: vec![
                RiskFactor {
                    name: "risk_level".to_string(),
                    contribution: base,
                    description: format!("Fund is classified as {}", fund.risk_level),
                },
                RiskFactor {
                    name: "volatility".to_string(),
                    contribution: volatility,
                    description: format!("Reported performance of {}%", fund.performance),
                },
            ],
        }
    }
}

fn base_score(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::Low => 20,
        RiskLevel::Medium => 45,
        RiskLevel::High => 70,
        RiskLevel::VeryHigh => 85,
    }
}

fn volatility_adjustment(performance: Decimal) -> u8 {
    let half = (performance.abs() / dec!(2)).floor();
    half.min(Decimal::from(MAX_VOLATILITY_ADJUSTMENT))
        .to_u8()
        .unwrap_or(MAX_VOLATILITY_ADJUSTMENT)
}
