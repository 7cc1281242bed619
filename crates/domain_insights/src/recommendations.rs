//! Advisory recommendations shown on the dashboard
//!
//! The recommendation engine is not part of this system; the
//! [`StaticRecommendations`] catalogue stands in for it behind the
//! [`RecommendationSource`] trait.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// What kind of action a recommendation proposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Rebalance,
    RiskReduction,
    Opportunity,
    Compliance,
}

/// A single advisory item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Stable identifier, e.g. `rec-001`
    pub id: String,
    pub title: String,
    pub rationale: String,
    /// Confidence between 0 and 1
    pub confidence: Decimal,
    pub category: RecommendationCategory,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        rationale: impl Into<String>,
        confidence: Decimal,
        category: RecommendationCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rationale: rationale.into(),
            confidence,
            category,
        }
    }
}

/// Supplies recommendations to the dashboard and the AI endpoint
pub trait RecommendationSource: Send + Sync {
    fn recommendations(&self) -> Vec<Recommendation>;
}

/// Fixed recommendation catalogue
#[derive(Debug, Clone)]
pub struct StaticRecommendations {
    catalogue: Vec<Recommendation>,
}

impl StaticRecommendations {
    /// Uses a caller-provided catalogue
    pub fn new(catalogue: Vec<Recommendation>) -> Self {
        Self { catalogue }
    }
}

impl Default for StaticRecommendations {
    fn default() -> Self {
        Self::new(vec![
            Recommendation::new(
                "rec-001",
                "Rebalance towards fixed income",
                "Equity exposure is above the strategic allocation band for members within ten years of retirement.",
                dec!(0.82),
                RecommendationCategory::Rebalance,
            ),
            Recommendation::new(
                "rec-002",
                "Review high-risk fund concentration",
                "Funds rated High or VeryHigh carry a growing share of total assets.",
                dec!(0.74),
                RecommendationCategory::RiskReduction,
            ),
            Recommendation::new(
                "rec-003",
                "Consider green bond allocation",
                "Sustainable bond funds have matched the benchmark with lower volatility over the last four quarters.",
                dec!(0.61),
                RecommendationCategory::Opportunity,
            ),
            Recommendation::new(
                "rec-004",
                "Refresh member risk profiles",
                "Risk questionnaires older than 24 months should be renewed before the next allocation cycle.",
                dec!(0.90),
                RecommendationCategory::Compliance,
            ),
        ])
    }
}

impl RecommendationSource for StaticRecommendations {
    fn recommendations(&self) -> Vec<Recommendation> {
        self.catalogue.clone()
    }
}
