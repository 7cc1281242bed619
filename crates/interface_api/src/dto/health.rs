//! Health DTOs

use serde::Serialize;

use core_kernel::HealthCheckResult;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: Vec<HealthCheckResult>,
}
