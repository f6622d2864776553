//! User role tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role attached to a session or profile.
///
/// Ordering follows privilege: `Member < Admin < Superuser`. `Unknown` is
/// the zero value the server uses for absent or unrecognized roles.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Role {
    #[default]
    Unknown,
    Member,
    Admin,
    Superuser,
}

impl Role {
    /// Returns true for roles with moderation privileges.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin | Role::Superuser)
    }

    /// Returns the role name as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Unknown => "Unknown",
            Role::Member => "Member",
            Role::Admin => "Admin",
            Role::Superuser => "Superuser",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            "superuser" => Ok(Role::Superuser),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}
