//! Dashboard overview aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use domain_fund::{round_currency, round_percent, Fund};

use crate::error::InsightError;
use crate::recommendations::Recommendation;

/// Headline figures for the dashboard landing page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    /// Sum of fund values
    pub total_assets: Decimal,
    /// Mean fund performance; zero when there are no funds
    pub average_performance: Decimal,
    /// Funds rated High or VeryHigh
    pub risk_warning_count: usize,
    pub fund_count: usize,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardOverview {
    /// Aggregates a fund set
    ///
    /// # Arguments
    ///
    /// * `funds` - Every fund visible on the dashboard
    /// * `recommendations` - Items to show alongside the figures
    /// * `generated_at` - Timestamp stamped on the overview
    ///
    /// # Errors
    ///
    /// `InsightError::Overflow` when a sum leaves the `Decimal` range.
    pub fn compute(
        funds: &[Fund],
        recommendations: Vec<Recommendation>,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, InsightError> {
        let total_assets = checked_sum(funds.iter().map(|f| f.value), "total assets")?;
        let average_performance = if funds.is_empty() {
            Decimal::ZERO
        } else {
            let total = checked_sum(funds.iter().map(|f| f.performance), "total performance")?;
            total / Decimal::from(funds.len())
        };

        Ok(Self {
            total_assets: round_currency(total_assets),
            average_performance: round_percent(average_performance),
            risk_warning_count: funds.iter().filter(|f| f.is_risk_warning()).count(),
            fund_count: funds.len(),
            recommendations,
            generated_at,
        })
    }
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>, what: &'static str) -> Result<Decimal, InsightError> {
    values.try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).ok_or(InsightError::Overflow(what))
    })
}
