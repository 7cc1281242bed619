//! Fund service tests against the in-memory fund store

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{FundId, PageRequest};
use domain_fund::{FundError, FundDraft, FundPort, FundQuery, FundService, RiskLevel};
use test_utils::{
    assert_fund_matches_draft, assert_sorted_by_name, fund_draft_strategy, FundBuilder, FundFixtures,
    InMemoryFundStore,
};

fn service() -> (FundService, Arc<InMemoryFundStore>) {
    let store = Arc::new(InMemoryFundStore::new());
    (FundService::new(store.clone()), store)
}

fn seeded_service() -> (FundService, Arc<InMemoryFundStore>) {
    let store = Arc::new(InMemoryFundStore::with_funds(FundFixtures::sample_funds()));
    (FundService::new(store.clone()), store)
}

// ============================================================================
// Create / Read
// ============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let (service, _) = service();
        let draft = FundDraft::new(" Green Bond Fund ", dec!(1500000.005), dec!(3.456), RiskLevel::Low);

        let created = service.create(draft.clone()).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_fund_matches_draft(&fetched, &draft);
        assert_eq!(fetched.name, "Green Bond Fund");
        assert_eq!(fetched.value, dec!(1500000.00));
        assert_eq!(fetched.performance, dec!(3.46));
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_stored() {
        let (service, store) = service();

        let result = service
            .create(FundDraft::new("Broken", dec!(-1), dec!(0), RiskLevel::Low))
            .await;

        assert!(matches!(result, Err(FundError::Validation(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let (service, _) = seeded_service();
        let id = FundId::new();

        let result = service.get(id).await;

        assert!(matches!(result, Err(FundError::NotFound(missing)) if missing == id));
    }
}

// ============================================================================
// Listing
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let (service, _) = seeded_service();

        let funds = service.all().await.unwrap();

        assert_eq!(funds.len(), 4);
        assert_sorted_by_name(&funds);
        assert_eq!(funds[0].name, "Balanced Pension Fund");
    }

    #[tokio::test]
    async fn test_list_filters_by_risk_level() {
        let (service, _) = seeded_service();

        let query = FundQuery::all().with_risk_level(RiskLevel::VeryHigh);
        let funds = service.list(&query).await.unwrap();

        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].name, "Emerging Markets Fund");
    }

    #[tokio::test]
    async fn test_list_pages() {
        let (service, _) = seeded_service();

        let query = FundQuery::all().with_page(PageRequest::new(Some(2), Some(3)));
        let funds = service.list(&query).await.unwrap();

        assert_eq!(funds.len(), 1);
        assert_eq!(funds[0].name, "Nordic Equity Fund");
    }
}

// ============================================================================
// Update / Delete
// ============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let existing = FundBuilder::new().with_name("Old Name").build();
        let store = Arc::new(InMemoryFundStore::with_funds([existing.clone()]));
        let service = FundService::new(store.clone());

        let draft = FundDraft::new("New Name", dec!(42.00), dec!(-3.10), RiskLevel::High);
        let updated = service.update(existing.id, draft.clone()).await.unwrap();

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.created_at, existing.created_at);
        assert!(updated.updated_at >= existing.updated_at);
        assert_fund_matches_draft(&store.get(existing.id).await.unwrap(), &draft);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (service, _) = seeded_service();

        let result = service.update(FundId::new(), FundFixtures::bond_draft()).await;

        assert!(matches!(result, Err(FundError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let (service, _) = seeded_service();

        let invalid = FundDraft::new("", dec!(1), dec!(1), RiskLevel::Low);
        let result = service.update(FundId::new(), invalid).await;

        assert!(matches!(result, Err(FundError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_fund() {
        let (service, store) = seeded_service();
        let victim = service.all().await.unwrap().remove(0);

        service.delete(victim.id).await.unwrap();

        assert_eq!(store.len().await, 3);
        assert!(matches!(service.get(victim.id).await, Err(FundError::NotFound(_))));
        assert!(matches!(service.delete(victim.id).await, Err(FundError::NotFound(_))));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_created_fund_reads_back_identically(draft in fund_draft_strategy()) {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        runtime.block_on(async {
            let (service, _) = service();
            let created = service.create(draft.clone()).await.unwrap();
            let fetched = service.get(created.id).await.unwrap();
            assert_eq!(created, fetched);
            assert_fund_matches_draft(&fetched, &draft);
        });
    }
}
