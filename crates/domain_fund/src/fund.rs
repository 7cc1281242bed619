//! Fund definition and validation
//!
//! This module defines the Fund entity, its risk classification, and the
//! draft type callers use to create or replace a fund.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use core_kernel::FundId;

use crate::error::FundError;
use crate::{round_currency, round_percent};

/// Longest accepted fund name, in characters
pub const MAX_NAME_LENGTH: usize = 200;

/// Exclusive upper bound on a fund value (10^18), the range of `NUMERIC(20, 2)`
pub const MAX_FUND_VALUE: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Exclusive upper bound on performance (10^7), the range of `NUMERIC(9, 2)`
pub const MAX_PERFORMANCE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Risk level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RiskLevel {
    /// Low risk - capital preservation
    Low = 1,
    /// Medium risk
    Medium = 2,
    /// High risk - growth oriented
    High = 3,
    /// Very high risk - speculative
    VeryHigh = 4,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::VeryHigh];

    /// Canonical name as stored and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "VeryHigh",
        }
    }

    /// Whether funds at this level count as risk warnings on the dashboard
    pub fn is_warning(&self) -> bool {
        *self >= RiskLevel::High
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = FundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "veryhigh" => Ok(RiskLevel::VeryHigh),
            _ => Err(FundError::Validation(format!("unknown risk level '{s}'"))),
        }
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = FundError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Caller-supplied fund fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundDraft {
    pub name: String,
    pub value: Decimal,
    /// Performance as a percentage, e.g. 7.5 for +7.5%
    pub performance: Decimal,
    pub risk_level: RiskLevel,
}

impl FundDraft {
    pub fn new(name: impl Into<String>, value: Decimal, performance: Decimal, risk_level: RiskLevel) -> Self {
        Self {
            name: name.into(),
            value,
            performance,
            risk_level,
        }
    }

    /// Validates the draft and returns it normalized
    ///
    /// The name is trimmed; value and performance are rounded to 2 dp.
    ///
    /// # Errors
    ///
    /// `FundError::Validation` when the name is blank or too long, the value
    /// is negative or reaches [`MAX_FUND_VALUE`], or performance is below
    /// -100% or reaches [`MAX_PERFORMANCE`].
    pub fn validated(self) -> Result<Self, FundError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(FundError::Validation("fund name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(FundError::Validation(format!(
                "fund name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }
        if self.value < Decimal::ZERO {
            return Err(FundError::Validation("fund value must not be negative".to_string()));
        }
        if self.performance < -Decimal::ONE_HUNDRED {
            return Err(FundError::Validation("performance cannot be below -100%".to_string()));
        }

        // Upper bounds apply to the stored, rounded figures
        let value = round_currency(self.value);
        if value >= MAX_FUND_VALUE {
            return Err(FundError::Validation(format!("fund value must be below {MAX_FUND_VALUE}")));
        }
        let performance = round_percent(self.performance);
        if performance >= MAX_PERFORMANCE {
            return Err(FundError::Validation(format!("performance must be below {MAX_PERFORMANCE}%")));
        }

        Ok(Self {
            name,
            value,
            performance,
            risk_level: self.risk_level,
        })
    }
}

/// A fund tracked by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Unique identifier
    pub id: FundId,
    /// Fund name
    pub name: String,
    /// Current value (assets held)
    pub value: Decimal,
    /// Performance percentage
    pub performance: Decimal,
    /// Risk level
    pub risk_level: RiskLevel,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Fund {
    /// Creates a new fund from a draft
    pub fn create(draft: FundDraft) -> Result<Self, FundError> {
        let draft = draft.validated()?;
        let now = Utc::now();
        Ok(Self {
            id: FundId::new(),
            name: draft.name,
            value: draft.value,
            performance: draft.performance,
            risk_level: draft.risk_level,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the mutable fields, keeping id and creation time
    pub fn apply(&mut self, draft: FundDraft) -> Result<(), FundError> {
        let draft = draft.validated()?;
        self.name = draft.name;
        self.value = draft.value;
        self.performance = draft.performance;
        self.risk_level = draft.risk_level;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether the fund counts as a risk warning
    pub fn is_risk_warning(&self) -> bool {
        self.risk_level.is_warning()
    }
}
