//! Fund domain errors

use core_kernel::{FundId, PortError};
use thiserror::Error;

/// Errors that can occur in the fund domain
#[derive(Debug, Error)]
pub enum FundError {
    #[error("Fund not found: {0}")]
    NotFound(FundId),

    #[error("Invalid fund: {0}")]
    Validation(String),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl FundError {
    /// Maps a port error, turning `NotFound` into the domain variant
    pub fn from_port(id: FundId, error: PortError) -> Self {
        if error.is_not_found() {
            FundError::NotFound(id)
        } else {
            FundError::Port(error)
        }
    }
}
