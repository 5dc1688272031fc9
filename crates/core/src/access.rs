//! Who may submit customer records.
//!
//! The policy is a deployment setting (`CUSTOMER_ACCESS_POLICY`). `open`
//! grants every caller, authenticated or not.

use std::str::FromStr;

use crate::roles::{ROLE_ADMIN, ROLE_MANAGER};

/// Access policy for customer writes (create, update, delete, restore, dry-run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerAccessPolicy {
    /// Every caller is permitted.
    #[default]
    Open,
    /// Any caller with a valid access token.
    Authenticated,
    /// Callers with the `manager` or `admin` role.
    Manager,
    /// Callers with the `admin` role only.
    Admin,
}

/// Outcome of checking a caller against a [`CustomerAccessPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// The policy needs an authenticated caller and there is none.
    Unauthenticated,
    /// The caller is authenticated but their role is insufficient.
    Forbidden,
}

impl CustomerAccessPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerAccessPolicy::Open => "open",
            CustomerAccessPolicy::Authenticated => "authenticated",
            CustomerAccessPolicy::Manager => "manager",
            CustomerAccessPolicy::Admin => "admin",
        }
    }

    /// Whether this policy ever needs the caller's identity.
    pub fn requires_identity(self) -> bool {
        self != CustomerAccessPolicy::Open
    }

    /// Decide for a caller whose role is `role` (`None` when anonymous).
    pub fn decide(self, role: Option<&str>) -> AccessDecision {
        match (self, role) {
            (CustomerAccessPolicy::Open, _) => AccessDecision::Granted,
            (_, None) => AccessDecision::Unauthenticated,
            (CustomerAccessPolicy::Authenticated, Some(_)) => AccessDecision::Granted,
            (CustomerAccessPolicy::Manager, Some(r)) if r == ROLE_MANAGER || r == ROLE_ADMIN => {
                AccessDecision::Granted
            }
            (CustomerAccessPolicy::Admin, Some(r)) if r == ROLE_ADMIN => AccessDecision::Granted,
            _ => AccessDecision::Forbidden,
        }
    }
}

impl FromStr for CustomerAccessPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(CustomerAccessPolicy::Open),
            "authenticated" => Ok(CustomerAccessPolicy::Authenticated),
            "manager" => Ok(CustomerAccessPolicy::Manager),
            "admin" => Ok(CustomerAccessPolicy::Admin),
            other => Err(format!(
                "unknown customer access policy '{other}' (expected open, authenticated, manager or admin)"
            )),
        }
    }
}
