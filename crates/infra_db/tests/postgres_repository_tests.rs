//! PostgreSQL adapter tests
//!
//! Each test starts its own container, so they are ignored by default.
//! Run with `cargo test -p infra_db -- --ignored` on a machine with Docker.

use rust_decimal_macros::dec;

use core_kernel::{FundId, HealthCheckable, PageRequest, UserId};
use domain_auth::{Role, UserPort};
use domain_fund::{FundPort, FundQuery, RiskLevel};
use infra_db::{DatabaseHealth, PgFundRepository, PgUserRepository};
use test_utils::{assert_sorted_by_name, db_test, FundBuilder, FundFixtures, UserFixtures};

db_test!(test_fund_insert_and_get, |pool| {
    let repo = PgFundRepository::new(pool);
    let fund = FundBuilder::new()
        .with_name("Persisted Fund")
        .with_value(dec!(1234567.89))
        .with_performance(dec!(-12.34))
        .with_risk_level(RiskLevel::VeryHigh)
        .build();

    repo.insert(&fund).await.unwrap();
    let loaded = repo.get(fund.id).await.unwrap();

    assert_eq!(loaded.id, fund.id);
    assert_eq!(loaded.name, "Persisted Fund");
    assert_eq!(loaded.value, dec!(1234567.89));
    assert_eq!(loaded.performance, dec!(-12.34));
    assert_eq!(loaded.risk_level, RiskLevel::VeryHigh);
});

db_test!(test_fund_list_orders_filters_and_pages, |pool| {
    let repo = PgFundRepository::new(pool);
    for fund in FundFixtures::sample_funds() {
        repo.insert(&fund).await.unwrap();
    }

    let all = repo.list(&FundQuery::all()).await.unwrap();
    assert_eq!(all.len(), 4);
    assert_sorted_by_name(&all);

    let low = repo
        .list(&FundQuery::all().with_risk_level(RiskLevel::Low))
        .await
        .unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].name, "Global Bond Fund");

    let page = repo
        .list(&FundQuery::all().with_page(PageRequest::new(Some(2), Some(1))))
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, all[1].name);
});

db_test!(test_fund_update_and_delete, |pool| {
    let repo = PgFundRepository::new(pool);
    let mut fund = FundBuilder::new().build();
    repo.insert(&fund).await.unwrap();

    fund.apply(FundFixtures::equity_draft()).unwrap();
    repo.update(&fund).await.unwrap();
    assert_eq!(repo.get(fund.id).await.unwrap().name, "Nordic Equity Fund");

    repo.delete(fund.id).await.unwrap();
    assert!(repo.get(fund.id).await.unwrap_err().is_not_found());
    assert!(repo.delete(fund.id).await.unwrap_err().is_not_found());
});

db_test!(test_fund_update_unknown_id, |pool| {
    let repo = PgFundRepository::new(pool);
    let ghost = FundBuilder::new().with_id(FundId::new()).build();

    assert!(repo.update(&ghost).await.unwrap_err().is_not_found());
});

db_test!(test_user_insert_and_lookup, |pool| {
    let repo = PgUserRepository::new(pool);
    let user = UserFixtures::user(Role::Analyst);

    repo.insert(&user).await.unwrap();

    let by_email = repo.find_by_email("analyst@sofi.test").await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);
    assert_eq!(by_email.role, Role::Analyst);
    assert_eq!(by_email.password_hash, user.password_hash);

    assert!(repo.find_by_email("missing@sofi.test").await.unwrap().is_none());
    assert!(repo.get(UserId::new()).await.unwrap_err().is_not_found());
});

db_test!(test_user_duplicate_email_is_conflict, |pool| {
    let repo = PgUserRepository::new(pool);
    repo.insert(&UserFixtures::user(Role::Viewer)).await.unwrap();

    let err = repo.insert(&UserFixtures::user(Role::Viewer)).await.unwrap_err();

    assert!(err.is_conflict());
});

db_test!(test_user_list_is_ordered_by_email, |pool| {
    let repo = PgUserRepository::new(pool);
    for user in UserFixtures::all_roles() {
        repo.insert(&user).await.unwrap();
    }

    let users = repo.list(PageRequest::default()).await.unwrap();
    let emails: Vec<_> = users.iter().map(|u| u.email.clone()).collect();
    let mut sorted = emails.clone();
    sorted.sort();

    assert_eq!(emails, sorted);
    assert_eq!(users.len(), 4);
});

db_test!(test_health_check_reports_healthy, |pool| {
    let health = DatabaseHealth::new(pool);

    let result = health.health_check().await;

    assert!(result.is_healthy());
    assert_eq!(result.adapter_id, "postgres");
});
