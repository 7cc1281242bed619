//! PostgreSQL adapters for the domain ports
//!
//! Each repository owns a clone of the pool, maps rows to domain types, and
//! reports failures as `PortError` via [`DatabaseError`].
//!
//! [`DatabaseError`]: crate::DatabaseError

pub mod user;
pub mod fund;

pub use user::PgUserRepository;
pub use fund::PgFundRepository;

use core_kernel::PortError;

use crate::error::DatabaseError;

pub(crate) fn port_error(error: sqlx::Error) -> PortError {
    DatabaseError::from(error).into()
}
