//! Recommendation and risk handlers

use axum::{
    extract::State,
    Extension, Json,
};

use core_kernel::FundId;
use domain_auth::Permission;
use domain_insights::{Recommendation, RiskScore};

use crate::auth::{require, Claims};
use crate::extract::ApiPath;
use crate::{error::ApiError, AppState};

/// Lists advisory recommendations
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    require(&claims, Permission::InsightsRead)?;
    Ok(Json(state.recommendations.recommendations()))
}

/// Scores a single fund
pub async fn fund_risk(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<FundId>,
) -> Result<Json<RiskScore>, ApiError> {
    require(&claims, Permission::InsightsRead)?;

    let fund = state.funds.get(id).await?;
    Ok(Json(RiskScore::for_fund(&fund)))
}
