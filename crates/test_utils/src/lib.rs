//! Test Utilities Crate
//!
//! Shared test infrastructure for the SOFI test suite.
//!
//! # Modules
//!
//! - `in_memory`: port adapters backed by hash maps, for service and API tests
//! - `fixtures`: pre-built users, funds and a cheap password hasher
//! - `builders`: builder patterns for test data construction
//! - `database`: PostgreSQL testcontainer with migrations applied
//! - `assertions`: custom assertion helpers for domain types
//! - `generators`: property-based test data generators

pub mod in_memory;
pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use in_memory::*;
pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
