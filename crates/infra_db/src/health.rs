//! Database health check

use std::time::Instant;

use async_trait::async_trait;
use core_kernel::{HealthCheckResult, HealthCheckable};
use tracing::warn;

use crate::pool::DatabasePool;

const ADAPTER_ID: &str = "postgres";

/// Readiness probe that runs `SELECT 1` against the pool
#[derive(Debug, Clone)]
pub struct DatabaseHealth {
    pool: DatabasePool,
}

impl DatabaseHealth {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheckable for DatabaseHealth {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let outcome = sqlx::query("SELECT 1").execute(&self.pool).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, latency_ms),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                HealthCheckResult::unhealthy(ADAPTER_ID, latency_ms, e.to_string())
            }
        }
    }
}
