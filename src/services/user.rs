//! User operations
//!
//! Every call runs a full load -> mutate -> save cycle against the store.
//! Deleting a user cascades: all categories and entries owned by that user
//! are removed in the same write.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{User, UserId};
use crate::storage::JsonStore;

/// Domain operations over users
pub struct UserService<'a> {
    store: &'a JsonStore,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// All users, in insertion order
    pub fn list(&self) -> LedgerResult<Vec<User>> {
        Ok(self.store.load()?.users)
    }

    /// Append a new user
    pub fn add(&self, name: &str, email: Option<String>) -> LedgerResult<User> {
        let mut doc = self.store.load()?;
        let user = User::new(name, email);
        doc.users.push(user.clone());
        self.store.save(&doc)?;
        Ok(user)
    }

    /// Overwrite the provided fields of an existing user
    pub fn update(
        &self,
        id: UserId,
        name: Option<String>,
        email: Option<String>,
    ) -> LedgerResult<User> {
        let mut doc = self.store.load()?;

        let user = doc
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| LedgerError::user_not_found(id.as_uuid().to_string()))?;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = Some(email);
        }

        let updated = user.clone();
        self.store.save(&doc)?;
        Ok(updated)
    }

    /// Remove a user together with every category and entry it owns.
    /// Deleting an absent id is not an error; it reports false and leaves
    /// the store untouched.
    pub fn delete(&self, id: UserId) -> LedgerResult<bool> {
        let mut doc = self.store.load()?;

        let before = doc.users.len();
        doc.users.retain(|u| u.id != id);
        if doc.users.len() == before {
            return Ok(false);
        }

        doc.categories.retain(|c| c.user_id != id);
        doc.entries.retain(|e| e.user_id != id);

        self.store.save(&doc)?;
        Ok(true)
    }
}
