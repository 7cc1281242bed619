//! Fund DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::FundId;
use domain_fund::{Fund, FundDraft, RiskLevel};

/// Query string of `GET /api/funds`
#[derive(Debug, Default, Deserialize)]
pub struct ListFundsQuery {
    /// Risk level name, parsed leniently (`very high`, `VeryHigh`, ...)
    pub risk_level: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFundRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub value: Decimal,
    pub performance: Decimal,
    pub risk_level: RiskLevel,
}

impl From<CreateFundRequest> for FundDraft {
    fn from(request: CreateFundRequest) -> Self {
        FundDraft::new(request.name, request.value, request.performance, request.risk_level)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFundRequest {
    pub id: FundId,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub value: Decimal,
    pub performance: Decimal,
    pub risk_level: RiskLevel,
}

impl UpdateFundRequest {
    /// Splits the request into the target id and the replacement fields
    pub fn into_parts(self) -> (FundId, FundDraft) {
        (
            self.id,
            FundDraft::new(self.name, self.value, self.performance, self.risk_level),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct FundResponse {
    pub id: FundId,
    pub name: String,
    pub value: Decimal,
    pub performance: Decimal,
    pub risk_level: RiskLevel,
    pub risk_warning: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Fund> for FundResponse {
    fn from(fund: Fund) -> Self {
        Self {
            risk_warning: fund.is_risk_warning(),
            id: fund.id,
            name: fund.name,
            value: fund.value,
            performance: fund.performance,
            risk_level: fund.risk_level,
            created_at: fund.created_at,
            updated_at: fund.updated_at,
        }
    }
}
