//! Fund Domain Ports
//!
//! `FundPort` is the persistence seam for funds. Adapters must order list
//! results by name (then id) so paging is stable.

use async_trait::async_trait;

use core_kernel::{DomainPort, FundId, PageRequest, PortError};

use crate::fund::{Fund, RiskLevel};

/// Query parameters for listing funds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FundQuery {
    /// Only funds at this risk level
    pub risk_level: Option<RiskLevel>,
    /// Page window
    pub page: PageRequest,
}

impl FundQuery {
    /// Every fund, unfiltered and unpaged
    pub fn all() -> Self {
        Self {
            risk_level: None,
            page: PageRequest::unbounded(),
        }
    }

    /// Restricts the query to one risk level
    pub fn with_risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level);
        self
    }

    /// Sets the page window
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// Whether a fund passes the filter part of the query
    pub fn matches(&self, fund: &Fund) -> bool {
        self.risk_level.map_or(true, |level| fund.risk_level == level)
    }
}

/// Persistence operations for funds
#[async_trait]
pub trait FundPort: DomainPort {
    /// Lists funds matching the query, ordered by name
    async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, PortError>;

    /// Gets a fund by id
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no such fund exists
    async fn get(&self, id: FundId) -> Result<Fund, PortError>;

    /// Stores a new fund
    async fn insert(&self, fund: &Fund) -> Result<(), PortError>;

    /// Replaces an existing fund
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no such fund exists
    async fn update(&self, fund: &Fund) -> Result<(), PortError>;

    /// Deletes a fund
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` when no such fund exists
    async fn delete(&self, id: FundId) -> Result<(), PortError>;
}
