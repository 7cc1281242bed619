//! Insights Domain
//!
//! Read-only views derived from the fund set:
//!
//! - **Dashboard overview**: total assets, average performance, risk-warning
//!   count and the current recommendations
//! - **Recommendations**: advisory items from a [`RecommendationSource`];
//!   the shipped source is a fixed catalogue
//! - **Risk score**: a deterministic 0-100 score per fund
//! - **Fund report**: the fund set plus summary totals, as CSV or JSON
//!
//! Nothing here is persisted.

pub mod dashboard;
pub mod recommendations;
pub mod risk;
pub mod report;
pub mod error;

pub use dashboard::DashboardOverview;
pub use recommendations::{Recommendation, RecommendationCategory, RecommendationSource, StaticRecommendations};
pub use risk::{RiskScore, RiskFactor};
pub use report::{FundReport, FundReportRow, ReportFormat, ReportSummary};
pub use error::InsightError;
