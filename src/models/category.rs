//! Category model
//!
//! Categories label ledger entries and belong to exactly one user. Deleting
//! a category orphans its entries rather than deleting them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};

/// A user-owned label for grouping ledger entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// The user who owns this category
    pub user_id: UserId,

    /// Category name
    pub name: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category for a user
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            user_id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let user_id = UserId::new();
        let category = Category::new(user_id, "Groceries");
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.user_id, user_id);
    }

    #[test]
    fn test_wire_field_names() {
        let category = Category::new(UserId::new(), "Groceries");
        let json = serde_json::to_value(&category).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_serialization_round_trip() {
        let category = Category::new(UserId::new(), "Groceries");
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
