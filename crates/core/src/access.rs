//! Role/operation authorization table.
//!
//! [`authorize`] is a pure predicate; denial is always surfaced to the
//! caller as a recoverable outcome, never a process fault. The capability
//! grants are defined per operation rather than as a strict superset chain,
//! so every (role, operation) pair is spelled out here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Privilege tier attached to a user. Ordered Viewer < Manager < Admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Manager,
    Admin,
}

impl Role {
    /// Database/wire representation of the role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// Whether this role may perform `operation`. See [`authorize`].
    pub fn allows(&self, operation: Operation) -> bool {
        authorize(*self, operation)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(Role::Viewer),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A gated operation on the inventory domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Browse, search, and run reports.
    ViewInventory,
    /// Change an existing asset's quantity or location.
    UpdateAsset,
    /// Register a new asset.
    CreateAsset,
    /// Permanently remove an asset.
    DeleteAsset,
    /// Add/rename/delete category and location entries.
    ManageCatalog,
    /// Create and list user accounts.
    ManageUsers,
}

/// The authorization gate: maps a role to its permitted operations.
///
/// | Operation      | Viewer | Manager | Admin |
/// |----------------|--------|---------|-------|
/// | ViewInventory  | yes    | yes     | yes   |
/// | UpdateAsset    | no     | yes     | yes   |
/// | CreateAsset    | no     | no      | yes   |
/// | DeleteAsset    | no     | no      | yes   |
/// | ManageCatalog  | no     | no      | yes   |
/// | ManageUsers    | no     | no      | yes   |
pub fn authorize(role: Role, operation: Operation) -> bool {
    match operation {
        Operation::ViewInventory => true,
        Operation::UpdateAsset => matches!(role, Role::Manager | Role::Admin),
        Operation::CreateAsset
        | Operation::DeleteAsset
        | Operation::ManageCatalog
        | Operation::ManageUsers => role == Role::Admin,
    }
}
