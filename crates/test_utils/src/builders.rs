//! Test Data Builders
//!
//! Builders that let a test specify only the fields it cares about.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::FundId;
use domain_fund::{Fund, FundDraft, RiskLevel};

/// Builder for fund drafts and funds
#[derive(Debug, Clone)]
pub struct FundBuilder {
    id: Option<FundId>,
    name: String,
    value: Decimal,
    performance: Decimal,
    risk_level: RiskLevel,
    created_at: Option<DateTime<Utc>>,
}

impl Default for FundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FundBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: None,
            name: "Test Fund".to_string(),
            value: dec!(100000.00),
            performance: dec!(4.50),
            risk_level: RiskLevel::Medium,
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: FundId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = value;
        self
    }

    pub fn with_performance(mut self, performance: Decimal) -> Self {
        self.performance = performance;
        self
    }

    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Builds the draft without validating it
    pub fn draft(&self) -> FundDraft {
        FundDraft::new(self.name.clone(), self.value, self.performance, self.risk_level)
    }

    /// Builds a validated fund
    ///
    /// # Panics
    ///
    /// Panics if the configured fields are invalid
    pub fn build(self) -> Fund {
        let mut fund = Fund::create(self.draft()).expect("builder produced an invalid fund");
        if let Some(id) = self.id {
            fund.id = id;
        }
        if let Some(at) = self.created_at {
            fund.created_at = at;
            fund.updated_at = at;
        }
        fund
    }
}
