//! User model
//!
//! A user owns categories and ledger entries. Deleting a user cascades to
//! everything it owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// An account holder who owns categories and entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
