//! Fund application service
//!
//! A thin layer between handlers and the [`FundPort`]: validation happens in
//! the domain types, persistence in the adapter.

use std::sync::Arc;

use tracing::{debug, info};

use core_kernel::FundId;

use crate::error::FundError;
use crate::fund::{Fund, FundDraft};
use crate::ports::{FundPort, FundQuery};

/// CRUD operations over funds
#[derive(Clone)]
pub struct FundService {
    funds: Arc<dyn FundPort>,
}

impl FundService {
    pub fn new(funds: Arc<dyn FundPort>) -> Self {
        Self { funds }
    }

    /// Lists funds matching a query
    pub async fn list(&self, query: &FundQuery) -> Result<Vec<Fund>, FundError> {
        let funds = self.funds.list(query).await?;
        debug!(count = funds.len(), risk_level = ?query.risk_level, "Listed funds");
        Ok(funds)
    }

    /// Every fund, for aggregate views and exports
    pub async fn all(&self) -> Result<Vec<Fund>, FundError> {
        self.list(&FundQuery::all()).await
    }

    /// Gets a fund by id
    pub async fn get(&self, id: FundId) -> Result<Fund, FundError> {
        self.funds.get(id).await.map_err(|e| FundError::from_port(id, e))
    }

    /// Validates and stores a new fund
    pub async fn create(&self, draft: FundDraft) -> Result<Fund, FundError> {
        let fund = Fund::create(draft)?;
        self.funds.insert(&fund).await?;
        info!(fund_id = %fund.id, name = %fund.name, "Fund created");
        Ok(fund)
    }

    /// Replaces the fields of an existing fund
    pub async fn update(&self, id: FundId, draft: FundDraft) -> Result<Fund, FundError> {
        let draft = draft.validated()?;
        let mut fund = self.get(id).await?;
        fund.apply(draft)?;
        self.funds.update(&fund).await.map_err(|e| FundError::from_port(id, e))?;
        info!(fund_id = %fund.id, "Fund updated");
        Ok(fund)
    }

    /// Deletes a fund
    pub async fn delete(&self, id: FundId) -> Result<(), FundError> {
        self.funds.delete(id).await.map_err(|e| FundError::from_port(id, e))?;
        info!(fund_id = %id, "Fund deleted");
        Ok(())
    }
}
