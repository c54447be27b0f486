//! The persisted document
//!
//! The whole ledger is one JSON document holding three ordered collections.
//! New records are appended; insertion order is preserved on disk.

use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, EntryId, UserId};
use super::{Category, Entry, User};

/// Complete persisted state: all users, categories, and entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Document {
    /// Look up a user by id
    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a category by id
    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up an entry by id
    pub fn find_entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
