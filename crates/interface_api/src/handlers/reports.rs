//! Report export handlers

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Utc;
use tracing::info;

use domain_auth::Permission;
use domain_insights::{FundReport, ReportFormat};

use crate::auth::{require, Claims};
use crate::dto::reports::ExportQuery;
use crate::extract::ApiQuery;
use crate::{error::ApiError, AppState};

/// Downloads the fund report as a CSV attachment or a JSON document
pub async fn export(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiQuery(params): ApiQuery<ExportQuery>,
) -> Result<Response, ApiError> {
    require(&claims, Permission::ReportExport)?;

    let format = match params.format.as_deref() {
        Some(raw) => raw.parse::<ReportFormat>()?,
        None => ReportFormat::default(),
    };

    let funds = state.funds.all().await?;
    let report = FundReport::build(&funds, Utc::now())?;
    let disposition = format!("attachment; filename=\"{}\"", report.file_name(format));

    info!(user = %claims.sub, format = format.extension(), funds = funds.len(), "Fund report exported");

    let response = match format {
        ReportFormat::Csv => (
            [
                (CONTENT_TYPE, format.content_type().to_string()),
                (CONTENT_DISPOSITION, disposition),
            ],
            report.to_csv()?,
        )
            .into_response(),
        ReportFormat::Json => ([(CONTENT_DISPOSITION, disposition)], Json(report)).into_response(),
    };

    Ok(response)
}
