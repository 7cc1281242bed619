//! Request handlers, one module per resource

pub mod auth;
pub mod dashboard;
pub mod fund;
pub mod insights;
pub mod portfolio;
pub mod reports;
pub mod users;
pub mod health;
