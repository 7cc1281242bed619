//! Roles and the permissions they grant

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Full access including user management
    Admin,
    /// Portfolio managers; may create and update funds
    Manager,
    /// Read access plus insights and exports
    Analyst,
    /// Read-only dashboard access
    Viewer,
}

/// A capability checked at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    DashboardRead,
    FundRead,
    FundWrite,
    FundDelete,
    InsightsRead,
    ReportExport,
    UserManage,
}

impl Role {
    /// All roles, most privileged first
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Analyst, Role::Viewer];

    /// Canonical name as stored in the database and carried in tokens
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Analyst => "Analyst",
            Role::Viewer => "Viewer",
        }
    }

    /// Permissions granted to this role
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Admin => &[
                DashboardRead,
                FundRead,
                FundWrite,
                FundDelete,
                InsightsRead,
                ReportExport,
                UserManage,
            ],
            Role::Manager => &[DashboardRead, FundRead, FundWrite, InsightsRead, ReportExport],
            Role::Analyst => &[DashboardRead, FundRead, InsightsRead, ReportExport],
            Role::Viewer => &[DashboardRead, FundRead],
        }
    }

    /// Checks whether this role grants a permission
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "analyst" => Ok(Role::Analyst),
            "viewer" => Ok(Role::Viewer),
            _ => Err(AuthError::UnknownRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AuthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Permission::DashboardRead => "dashboard:read",
            Permission::FundRead => "fund:read",
            Permission::FundWrite => "fund:write",
            Permission::FundDelete => "fund:delete",
            Permission::InsightsRead => "insights:read",
            Permission::ReportExport => "report:export",
            Permission::UserManage => "user:manage",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" analyst ".parse::<Role>().unwrap(), Role::Analyst);
        assert!(matches!("owner".parse::<Role>(), Err(AuthError::UnknownRole(_))));
    }

    #[test]
    fn test_round_trips_through_canonical_name() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"Manager\"");
        let parsed: Role = serde_json::from_str("\"viewer\"").unwrap();
        assert_eq!(parsed, Role::Viewer);
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn test_permission_table() {
        assert!(Role::Admin.can(Permission::UserManage));
        assert!(Role::Admin.can(Permission::FundDelete));

        assert!(Role::Manager.can(Permission::FundWrite));
        assert!(!Role::Manager.can(Permission::FundDelete));
        assert!(!Role::Manager.can(Permission::UserManage));

        assert!(Role::Analyst.can(Permission::ReportExport));
        assert!(!Role::Analyst.can(Permission::FundWrite));

        assert!(Role::Viewer.can(Permission::FundRead));
        assert!(!Role::Viewer.can(Permission::InsightsRead));
    }

    #[test]
    fn test_every_role_can_read_dashboard() {
        assert!(Role::ALL.iter().all(|r| r.can(Permission::DashboardRead)));
    }

    proptest! {
        #[test]
        fn prop_parse_ignores_case(index in 0usize..4, mask in prop::collection::vec(any::<bool>(), 7)) {
            let role = Role::ALL[index];
            let mixed: String = role
                .as_str()
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            prop_assert_eq!(mixed.parse::<Role>().unwrap(), role);
        }
    }
}
