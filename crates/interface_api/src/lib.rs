//! HTTP API Layer
//!
//! This crate provides the REST API for the SOFI dashboard using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Authentication, audit logging, request ids, tracing
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{error, message}` responses
//!
//! Handlers only see domain services and port traits, so the same router
//! runs against PostgreSQL in production and in-memory stores in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(users, funds, health, PasswordHasher::default(), config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;
pub mod extract;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use core_kernel::HealthCheckable;
use domain_auth::{AuthService, PasswordHasher, UserPort};
use domain_fund::{FundPort, FundService};
use domain_insights::{RecommendationSource, StaticRecommendations};

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, dashboard, fund, health, insights, portfolio, reports, users};
use crate::middleware::{audit_middleware, auth_middleware};

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub funds: FundService,
    pub recommendations: Arc<dyn RecommendationSource>,
    pub health: Arc<dyn HealthCheckable>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Wires services over the given adapters
    ///
    /// # Arguments
    ///
    /// * `users` - User persistence adapter
    /// * `funds` - Fund persistence adapter
    /// * `health` - Readiness probe for the backing store
    /// * `hasher` - Password hasher for new accounts
    /// * `config` - API configuration
    pub fn new(
        users: Arc<dyn UserPort>,
        funds: Arc<dyn FundPort>,
        health: Arc<dyn HealthCheckable>,
        hasher: PasswordHasher,
        config: ApiConfig,
    ) -> Self {
        Self {
            auth: AuthService::new(users, hasher),
            funds: FundService::new(funds),
            recommendations: Arc::new(StaticRecommendations::default()),
            health,
            config: Arc::new(config),
        }
    }

    /// Replaces the recommendation source
    pub fn with_recommendations(mut self, source: Arc<dyn RecommendationSource>) -> Self {
        self.recommendations = source;
        self
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let login_routes = Router::new().route("/auth/login", post(auth_handlers::login));

    // Protected API routes
    let protected_routes = Router::new()
        .route("/auth/me", get(auth_handlers::me))
        .route("/dashboard/overview", get(dashboard::overview))
        .route(
            "/funds",
            get(fund::list_funds).post(fund::create_fund).put(fund::update_fund),
        )
        .route("/funds/:id", get(fund::get_fund).delete(fund::delete_fund))
        .route("/ai/recommendations", get(insights::recommendations))
        .route("/risk/fund/:id", get(insights::fund_risk))
        .route("/portfolios/:id/compare", get(portfolio::compare))
        .route("/reports/export", get(reports::export))
        .route("/users", get(users::list_users).post(users::create_user))
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .merge(public_routes)
        .nest("/api", login_routes.merge(protected_routes))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
