//! Core Kernel - Foundational types shared by the SOFI crates
//!
//! This crate provides the building blocks used across every domain module:
//! - Strongly-typed identifiers for users and funds
//! - The port error and health-check vocabulary used by adapters
//! - Pagination requests for list operations

pub mod identifiers;
pub mod error;
pub mod ports;
pub mod pagination;

pub use identifiers::{UserId, FundId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use pagination::PageRequest;
