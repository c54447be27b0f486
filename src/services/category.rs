//! Category operations
//!
//! Categories must reference an existing user at creation time. Deleting a
//! category does NOT delete its entries: their categoryId is cleared and
//! they live on as orphans. This asymmetry with user deletion (which
//! cascades) matches the observable reference behavior and is pinned by
//! tests.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, CategoryId, UserId};
use crate::storage::JsonStore;

/// Domain operations over categories
pub struct CategoryService<'a> {
    store: &'a JsonStore,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Categories owned by a user, in insertion order
    pub fn list(&self, user_id: UserId) -> LedgerResult<Vec<Category>> {
        let doc = self.store.load()?;
        Ok(doc
            .categories
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect())
    }

    /// Append a new category owned by an existing user
    pub fn add(&self, user_id: UserId, name: &str) -> LedgerResult<Category> {
        let mut doc = self.store.load()?;

        if doc.find_user(user_id).is_none() {
            return Err(LedgerError::user_not_found(user_id.as_uuid().to_string()));
        }

        let category = Category::new(user_id, name);
        doc.categories.push(category.clone());
        self.store.save(&doc)?;
        Ok(category)
    }

    /// Overwrite the name of an existing category
    pub fn update(&self, id: CategoryId, name: String) -> LedgerResult<Category> {
        let mut doc = self.store.load()?;

        let category = doc
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LedgerError::category_not_found(id.as_uuid().to_string()))?;

        category.name = name;
        let updated = category.clone();
        self.store.save(&doc)?;
        Ok(updated)
    }

    /// Remove a category, orphaning the entries that referenced it.
    /// Deleting an absent id reports false and leaves the store untouched.
    pub fn delete(&self, id: CategoryId) -> LedgerResult<bool> {
        let mut doc = self.store.load()?;

        let before = doc.categories.len();
        doc.categories.retain(|c| c.id != id);
        if doc.categories.len() == before {
            return Ok(false);
        }

        for entry in doc.entries.iter_mut() {
            if entry.category_id == Some(id) {
                entry.category_id = None;
            }
        }

        self.store.save(&doc)?;
        Ok(true)
    }
}
