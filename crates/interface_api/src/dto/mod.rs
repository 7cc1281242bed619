//! Request and response bodies

pub mod auth;
pub mod fund;
pub mod users;
pub mod reports;
pub mod health;
