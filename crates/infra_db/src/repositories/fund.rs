//! Fund repository implementation
//!
//! Database access for the `funds` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use core_kernel::{DomainPort, FundId, PortError};
use domain_fund::{Fund, FundPort, FundQuery, RiskLevel};

use super::port_error;
use crate::error::DatabaseError;

const FUND_COLUMNS: &str =
    "fund_id, fund_name, fund_value, performance, risk_level, created_at, updated_at";

/// PostgreSQL implementation of [`FundPort`]
#[derive(Debug, Clone)]
pub struct PgFundRepository {
    pool: PgPool,
}

impl PgFundRepository {
    /// Creates a new PgFundRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgFundRepository {}

#[async_trait]
impl FundPort for PgFundRepository {
    async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, PortError> {
        let sql = format!(
            "SELECT {FUND_COLUMNS} FROM funds \
             WHERE ($1::text IS NULL OR risk_level = $1) \
             ORDER BY fund_name, fund_id \
             LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, FundRow>(&sql)
            .bind(query.risk_level.map(|level| level.as_str()))
            .bind(i64::from(query.page.limit()))
            .bind(i64::from(query.page.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(port_error)?;

        debug!(rows = rows.len(), "Fetched funds");
        rows.into_iter()
            .map(|row| Fund::try_from(row).map_err(PortError::from))
            .collect()
    }

    async fn get(&self, id: FundId) -> Result<Fund, PortError> {
        let sql = format!("SELECT {FUND_COLUMNS} FROM funds WHERE fund_id = $1");

        let row = sqlx::query_as::<_, FundRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(port_error)?
            .ok_or_else(|| PortError::not_found("Fund", id))?;

        Ok(Fund::try_from(row)?)
    }

    async fn insert(&self, fund: &Fund) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO funds (fund_id, fund_name, fund_value, performance, risk_level, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::from(fund.id))
        .bind(&fund.name)
        .bind(fund.value)
        .bind(fund.performance)
        .bind(fund.risk_level.as_str())
        .bind(fund.created_at)
        .bind(fund.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(())
    }

    async fn update(&self, fund: &Fund) -> Result<(), PortError> {
        let result = sqlx::query(
            r#"
            UPDATE funds
            SET fund_name = $2, fund_value = $3, performance = $4, risk_level = $5, updated_at = $6
            WHERE fund_id = $1
            "#,
        )
        .bind(Uuid::from(fund.id))
        .bind(&fund.name)
        .bind(fund.value)
        .bind(fund.performance)
        .bind(fund.risk_level.as_str())
        .bind(fund.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Fund", fund.id));
        }
        Ok(())
    }

    async fn delete(&self, id: FundId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM funds WHERE fund_id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Fund", id));
        }
        Ok(())
    }
}

/// Database row for a fund
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FundRow {
    pub fund_id: Uuid,
    pub fund_name: String,
    pub fund_value: Decimal,
    pub performance: Decimal,
    pub risk_level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<FundRow> for Fund {
    type Error = DatabaseError;

    fn try_from(row: FundRow) -> Result<Self, Self::Error> {
        let risk_level: RiskLevel = row
            .risk_level
            .parse()
            .map_err(|_| DatabaseError::CorruptRow(format!("fund risk level '{}'", row.risk_level)))?;

        Ok(Fund {
            id: FundId::from(row.fund_id),
            name: row.fund_name,
            value: row.fund_value,
            performance: row.performance,
            risk_level,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
