use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;

/// Which side of a donation a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Recipient,
}

impl Role {
    /// First letter of the role name, used to prefix generated ids.
    pub fn prefix(self) -> char {
        match self {
            Role::Donor => 'd',
            Role::Recipient => 'r',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Recipient => "recipient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Role::Donor),
            "recipient" => Ok(Role::Recipient),
            other => Err(ModelError::Validation(format!("unknown role: {other}"))),
        }
    }
}

/// Identity record of the signed-in user.
///
/// `points` is only meaningful for donors and `verified` only for recipients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl User {
    /// Build a fresh identity for `role` with the role's default fields.
    pub fn new_for_role(id: String, name: String, email: String, image: Option<String>, role: Role) -> Self {
        let (points, verified) = match role {
            Role::Donor => (Some(0), None),
            Role::Recipient => (None, Some(false)),
        };
        Self { id, name, email, image, points, verified }
    }
}
