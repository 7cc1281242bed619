//! Fund handlers

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};

use core_kernel::{FundId, PageRequest};
use domain_auth::Permission;
use domain_fund::{FundQuery, RiskLevel};

use crate::auth::{require, Claims};
use crate::dto::fund::*;
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::{error::ApiError, AppState};

/// Lists funds ordered by name
pub async fn list_funds(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiQuery(params): ApiQuery<ListFundsQuery>,
) -> Result<Json<Vec<FundResponse>>, ApiError> {
    require(&claims, Permission::FundRead)?;

    let mut query = FundQuery::default().with_page(PageRequest::new(params.limit, params.offset));
    if let Some(level) = params.risk_level.as_deref() {
        let level: RiskLevel = level.parse().map_err(|_| {
            ApiError::BadRequest(format!("unknown risk_level '{level}'"))
        })?;
        query = query.with_risk_level(level);
    }

    let funds = state.funds.list(&query).await?;
    Ok(Json(funds.into_iter().map(FundResponse::from).collect()))
}

/// Gets a fund by ID
pub async fn get_fund(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<FundId>,
) -> Result<Json<FundResponse>, ApiError> {
    require(&claims, Permission::FundRead)?;
    Ok(Json(state.funds.get(id).await?.into()))
}

/// Creates a fund
pub async fn create_fund(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(request): ValidatedJson<CreateFundRequest>,
) -> Result<(StatusCode, Json<FundResponse>), ApiError> {
    require(&claims, Permission::FundWrite)?;

    let fund = state.funds.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(fund.into())))
}

/// Replaces a fund; the id travels in the body
pub async fn update_fund(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(request): ValidatedJson<UpdateFundRequest>,
) -> Result<Json<FundResponse>, ApiError> {
    require(&claims, Permission::FundWrite)?;

    let (id, draft) = request.into_parts();
    Ok(Json(state.funds.update(id, draft).await?.into()))
}

/// Deletes a fund
pub async fn delete_fund(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<FundId>,
) -> Result<StatusCode, ApiError> {
    require(&claims, Permission::FundDelete)?;

    state.funds.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
