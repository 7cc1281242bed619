//! Portfolio handlers

use axum::{extract::Path, Extension};

use domain_auth::Permission;

use crate::auth::{require, Claims};
use crate::error::ApiError;

/// Portfolio comparison
///
/// There is no portfolio entity yet, so the route only authorizes the
/// caller and answers `501 Not Implemented`.
pub async fn compare(
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    require(&claims, Permission::InsightsRead)?;
    Err(ApiError::NotImplemented(format!(
        "Portfolio comparison for '{id}' is not available"
    )))
}
