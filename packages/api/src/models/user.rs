//! # User model for Inkwell accounts
//!
//! Only the client-safe side of the account lives here: the payloads the
//! frontends send to the account endpoints and the [`UserInfo`] projection
//! they get back. The full database row (password hash, audit timestamps)
//! belongs to the backend and never crosses into this crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Authorization level requested at registration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Creator,
}

impl Role {
    /// Every selectable role, in the order the form offers them.
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::Creator];

    /// The wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Creator => "creator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not one of the three known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "creator" => Ok(Role::Creator),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Payload for the account-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Payload for the password-login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

/// Account information safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
