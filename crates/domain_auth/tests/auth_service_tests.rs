//! Authentication service tests against the in-memory user store

use std::sync::Arc;

use domain_auth::{AuthError, AuthService, LoginCredentials, Role, UserPort};
use test_utils::{fast_hasher, InMemoryUserStore, UserFixtures, FIXTURE_PASSWORD};

fn service_with(store: Arc<InMemoryUserStore>) -> AuthService {
    AuthService::new(store, fast_hasher())
}

fn seeded_service() -> (AuthService, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::with_users(UserFixtures::all_roles()));
    (service_with(store.clone()), store)
}

mod authenticate {
    use super::*;

    #[tokio::test]
    async fn test_valid_credentials_return_user() {
        let (service, _) = seeded_service();
        let credentials = LoginCredentials::try_from_parts("manager@sofi.test", FIXTURE_PASSWORD).unwrap();

        let user = service.authenticate(&credentials).await.unwrap();

        assert_eq!(user.email, "manager@sofi.test");
        assert_eq!(user.role, Role::Manager);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let (service, _) = seeded_service();
        let credentials = LoginCredentials::try_from_parts("admin@sofi.test", "not-the-password").unwrap();

        let result = service.authenticate(&credentials).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_email_is_indistinguishable() {
        let (service, _) = seeded_service();
        let credentials = LoginCredentials::try_from_parts("nobody@sofi.test", FIXTURE_PASSWORD).unwrap();

        let err = service.authenticate(&credentials).await.unwrap_err();

        assert_eq!(err.to_string(), AuthError::InvalidCredentials.to_string());
    }

    #[tokio::test]
    async fn test_email_lookup_ignores_case() {
        let (service, _) = seeded_service();
        let credentials = LoginCredentials::try_from_parts("  Viewer@SOFI.test ", FIXTURE_PASSWORD).unwrap();

        let user = service.authenticate(&credentials).await.unwrap();

        assert_eq!(user.role, Role::Viewer);
    }
}

mod register {
    use super::*;

    #[tokio::test]
    async fn test_register_then_login() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());

        let user = service
            .register("New.Analyst@Sofi.test", "long-enough-pw", Role::Analyst)
            .await
            .unwrap();
        assert_eq!(user.email, "new.analyst@sofi.test");
        assert_ne!(user.password_hash, "long-enough-pw");
        assert!(user.password_hash.starts_with("$argon2id$"));

        let credentials = LoginCredentials::try_from_parts("new.analyst@sofi.test", "long-enough-pw").unwrap();
        let logged_in = service.authenticate(&credentials).await.unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let (service, store) = seeded_service();

        let result = service.register("ADMIN@sofi.test", "another-password", Role::Viewer).await;

        assert!(matches!(result, Err(AuthError::DuplicateEmail(email)) if email == "admin@sofi.test"));
        assert_eq!(store.len().await, Role::ALL.len());
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());

        let result = service.register("short@sofi.test", "seven77", Role::Viewer).await;

        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let service = service_with(Arc::new(InMemoryUserStore::new()));

        let result = service.register("not-an-email", "long-enough-pw", Role::Viewer).await;

        assert!(matches!(result, Err(AuthError::InvalidEmail(_))));
    }
}

mod bootstrap {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_admin_is_created_once() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());

        assert!(service.ensure_bootstrap_admin("root@sofi.test", "bootstrap-secret").await.unwrap());
        assert!(!service.ensure_bootstrap_admin("ROOT@sofi.test", "bootstrap-secret").await.unwrap());

        let admin = store.find_by_email("root@sofi.test").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(store.len().await, 1);
    }
}

mod lookup {
    use super::*;
    use core_kernel::{PageRequest, UserId};

    #[tokio::test]
    async fn test_get_user_not_found() {
        let (service, _) = seeded_service();

        let result = service.get_user(UserId::new()).await;

        assert!(matches!(result, Err(AuthError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_users_is_ordered_and_paged() {
        let (service, _) = seeded_service();

        let all = service.list_users(PageRequest::default()).await.unwrap();
        let emails: Vec<_> = all.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(
            emails,
            ["admin@sofi.test", "analyst@sofi.test", "manager@sofi.test", "viewer@sofi.test"]
        );

        let second_page = service.list_users(PageRequest::new(Some(2), Some(2))).await.unwrap();
        assert_eq!(second_page.len(), 2);
        assert_eq!(second_page[0].email, "manager@sofi.test");
    }
}
