//! Dashboard handlers

use axum::{extract::State, Extension, Json};
use chrono::Utc;

use domain_auth::Permission;
use domain_insights::DashboardOverview;

use crate::auth::{require, Claims};
use crate::{error::ApiError, AppState};

/// Aggregate figures over every fund
pub async fn overview(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DashboardOverview>, ApiError> {
    require(&claims, Permission::DashboardRead)?;

    let funds = state.funds.all().await?;
    let recommendations = state.recommendations.recommendations();

    Ok(Json(DashboardOverview::compute(&funds, recommendations, Utc::now())?))
}
