//! User management handlers

use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};

use core_kernel::PageRequest;
use domain_auth::Permission;

use crate::auth::{require, Claims};
use crate::dto::users::*;
use crate::extract::{ApiQuery, ValidatedJson};
use crate::{error::ApiError, AppState};

/// Creates a user account
pub async fn create_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    require(&claims, Permission::UserManage)?;

    let user = state
        .auth
        .register(&request.email, &request.password, request.role)
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists user accounts ordered by email
pub async fn list_users(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiQuery(params): ApiQuery<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    require(&claims, Permission::UserManage)?;

    let users = state
        .auth
        .list_users(PageRequest::new(params.limit, params.offset))
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
