//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for SOFI using SQLx.
//!
//! # Architecture
//!
//! The crate implements the domain port traits (`UserPort`, `FundPort`) on
//! top of a shared connection pool, so the domain and API layers never see
//! SQL. Schema changes ship as embedded migrations.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PgFundRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/sofi")).await?;
//! run_migrations(&pool).await?;
//! let funds = PgFundRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod health;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use migrations::{run_migrations, MIGRATOR};
pub use health::DatabaseHealth;
pub use repositories::{PgFundRepository, PgUserRepository};
