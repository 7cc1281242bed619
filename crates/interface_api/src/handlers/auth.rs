//! Login and identity handlers

use axum::{extract::State, Extension, Json};
use tracing::info;

use domain_auth::LoginCredentials;

use crate::auth::{create_token, Claims};
use crate::dto::auth::{LoginRequest, LoginResponse, MeResponse};
use crate::extract::ValidatedJson;
use crate::{error::ApiError, AppState};

/// Exchanges email and password for an access token
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let credentials = LoginCredentials::try_from(request)?;
    let user = state.auth.authenticate(&credentials).await?;

    let config = &state.config;
    let token = create_token(&user, &config.jwt_secret, &config.jwt_issuer, config.jwt_expiration_secs)?;
    info!(user_id = %user.id, role = %user.role, "Access token issued");

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer",
        role: user.role,
        expires_in: config.jwt_expiration_secs,
    }))
}

/// Returns the caller's identity from their token
pub async fn me(Extension(claims): Extension<Claims>) -> Json<MeResponse> {
    Json(MeResponse {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}
