//! Pre-built Test Fixtures
//!
//! Consistent, predictable users and funds for unit and API tests.

use chrono::{DateTime, TimeZone, Utc};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use domain_auth::{PasswordHasher, Role, User};
use domain_fund::{Fund, FundDraft, RiskLevel};

/// Password shared by every fixture user
pub const FIXTURE_PASSWORD: &str = "correct-horse-battery";

/// Hash of [`FIXTURE_PASSWORD`], computed once per test binary
static FIXTURE_PASSWORD_HASH: Lazy<String> = Lazy::new(|| {
    fast_hasher()
        .hash(FIXTURE_PASSWORD)
        .expect("fixture password must hash")
});

/// Argon2 hasher with minimal cost, for tests only
pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(64, 1).expect("minimal argon2 params are valid")
}

/// Fixture for user accounts
pub struct UserFixtures;

impl UserFixtures {
    /// Canonical fixture email for a role, e.g. `admin@sofi.test`
    pub fn email(role: Role) -> String {
        format!("{}@sofi.test", role.as_str().to_lowercase())
    }

    /// A user with the given role whose password is [`FIXTURE_PASSWORD`]
    pub fn user(role: Role) -> User {
        User::new(&Self::email(role), FIXTURE_PASSWORD_HASH.clone(), role)
            .expect("fixture email is valid")
    }

    /// One user per role
    pub fn all_roles() -> Vec<User> {
        Role::ALL.into_iter().map(Self::user).collect()
    }
}

/// Fixture for funds
pub struct FundFixtures;

impl FundFixtures {
    /// Draft for a conservative bond fund
    pub fn bond_draft() -> FundDraft {
        FundDraft::new("Global Bond Fund", dec!(2500000.00), dec!(2.40), RiskLevel::Low)
    }

    /// Draft for a balanced fund
    pub fn balanced_draft() -> FundDraft {
        FundDraft::new("Balanced Pension Fund", dec!(1750000.00), dec!(5.10), RiskLevel::Medium)
    }

    /// Draft for an equity fund
    pub fn equity_draft() -> FundDraft {
        FundDraft::new("Nordic Equity Fund", dec!(980000.00), dec!(11.75), RiskLevel::High)
    }

    /// Draft for an emerging markets fund
    pub fn emerging_draft() -> FundDraft {
        FundDraft::new("Emerging Markets Fund", dec!(420000.00), dec!(-8.30), RiskLevel::VeryHigh)
    }

    /// Four funds covering every risk level
    ///
    /// Totals: assets 5,650,000.00; mean performance 2.74; two warnings.
    pub fn sample_funds() -> Vec<Fund> {
        [
            Self::bond_draft(),
            Self::balanced_draft(),
            Self::equity_draft(),
            Self::emerging_draft(),
        ]
        .into_iter()
        .map(|draft| Fund::create(draft).expect("fixture drafts are valid"))
        .collect()
    }

    /// A valid draft with a random company name
    pub fn random_draft(risk_level: RiskLevel) -> FundDraft {
        let name: String = CompanyName().fake();
        FundDraft::new(format!("{name} Fund"), dec!(100000.00), dec!(3.00), risk_level)
    }
}

/// Fixed timestamps for deterministic report and dashboard tests
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// 2024-03-15 09:30:00 UTC
    pub fn report_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }
}
