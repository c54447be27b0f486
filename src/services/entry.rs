//! Ledger entry operations
//!
//! Entries reference a user (checked at creation) and optionally one of
//! that user's categories (also checked at creation only; a later category
//! deletion orphans the entry instead of invalidating it).

use chrono::{DateTime, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryId, Entry, EntryId, EntryKind, UserId};
use crate::storage::JsonStore;

/// Input for creating an entry
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: UserId,
    pub category_id: Option<CategoryId>,
    pub kind: EntryKind,
    pub amount: f64,
    pub currency: Option<String>,
    /// Defaults to now when not supplied
    pub timestamp: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

/// Partial update for an entry; absent fields are left untouched.
/// `category_id: Some(None)` clears the reference.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub category_id: Option<Option<CategoryId>>,
    pub kind: Option<EntryKind>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

/// Filter for listing entries
#[derive(Debug, Clone)]
pub struct EntryFilter {
    pub user_id: UserId,
    pub category_id: Option<CategoryId>,
    /// Inclusive lower bound
    pub start: Option<DateTime<Utc>>,
    /// Exclusive upper bound
    pub end: Option<DateTime<Utc>>,
}

/// Domain operations over ledger entries
pub struct EntryService<'a> {
    store: &'a JsonStore,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Entries matching the filter, sorted by timestamp descending
    pub fn list(&self, filter: &EntryFilter) -> LedgerResult<Vec<Entry>> {
        let doc = self.store.load()?;

        let mut entries: Vec<Entry> = doc
            .entries
            .into_iter()
            .filter(|e| e.user_id == filter.user_id)
            .filter(|e| match filter.category_id {
                Some(category_id) => e.category_id == Some(category_id),
                None => true,
            })
            .filter(|e| filter.start.map_or(true, |start| e.timestamp >= start))
            .filter(|e| filter.end.map_or(true, |end| e.timestamp < end))
            .collect();

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Append a new entry. The user must exist; a supplied category must
    /// exist and belong to that same user.
    pub fn add(&self, new: NewEntry) -> LedgerResult<Entry> {
        let mut doc = self.store.load()?;

        if doc.find_user(new.user_id).is_none() {
            return Err(LedgerError::user_not_found(
                new.user_id.as_uuid().to_string(),
            ));
        }

        if let Some(category_id) = new.category_id {
            let owned = doc
                .find_category(category_id)
                .map_or(false, |c| c.user_id == new.user_id);
            if !owned {
                return Err(LedgerError::category_not_found(
                    category_id.as_uuid().to_string(),
                ));
            }
        }

        let mut entry = Entry::new(
            new.user_id,
            new.category_id,
            new.kind,
            new.amount,
            new.timestamp,
        );
        entry.currency = new.currency;
        entry.note = new.note;

        doc.entries.push(entry.clone());
        self.store.save(&doc)?;
        Ok(entry)
    }

    /// Overwrite the provided fields of an existing entry and stamp
    /// updatedAt
    pub fn update(&self, id: EntryId, patch: EntryPatch) -> LedgerResult<Entry> {
        let mut doc = self.store.load()?;

        let entry = doc
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerError::entry_not_found(id.as_uuid().to_string()))?;

        if let Some(category_id) = patch.category_id {
            entry.category_id = category_id;
        }
        if let Some(kind) = patch.kind {
            entry.kind = kind;
        }
        if let Some(amount) = patch.amount {
            entry.amount = amount;
        }
        if let Some(currency) = patch.currency {
            entry.currency = Some(currency);
        }
        if let Some(timestamp) = patch.timestamp {
            entry.timestamp = timestamp;
        }
        if let Some(note) = patch.note {
            entry.note = Some(note);
        }
        entry.updated_at = Some(Utc::now());

        let updated = entry.clone();
        self.store.save(&doc)?;
        Ok(updated)
    }

    /// Remove an entry. Deleting an absent id reports false and leaves the
    /// store untouched.
    pub fn delete(&self, id: EntryId) -> LedgerResult<bool> {
        let mut doc = self.store.load()?;

        let before = doc.entries.len();
        doc.entries.retain(|e| e.id != id);
        if doc.entries.len() == before {
            return Ok(false);
        }

        self.store.save(&doc)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_timestamp, Category, User};
    use tempfile::TempDir;

    fn store_with_user_and_category() -> (TempDir, JsonStore, UserId, CategoryId) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::new(temp_dir.path().join("ledger.json"));

        let mut doc = store.load().unwrap();
        let user = User::new("Ada", None);
        let user_id = user.id;
        doc.users.push(user);

        let category = Category::new(user_id, "Groceries");
        let category_id = category.id;
        doc.categories.push(category);
        store.save(&doc).unwrap();

        (temp_dir, store, user_id, category_id)
    }

    fn new_entry(user_id: UserId, category_id: Option<CategoryId>) -> NewEntry {
        NewEntry {
            user_id,
            category_id,
            kind: EntryKind::Expense,
            amount: 10.0,
            currency: None,
            timestamp: None,
            note: None,
        }
    }

    #[test]
    fn test_add_with_defaults() {
        let (_temp_dir, store, user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let entry = service.add(new_entry(user_id, None)).unwrap();
        assert_eq!(entry.amount, 10.0);
        assert!(entry.updated_at.is_none());
    }

    #[test]
    fn test_add_rejects_missing_user() {
        let (_temp_dir, store, _user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let err = service.add(new_entry(UserId::new(), None)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_rejects_other_users_category() {
        let (_temp_dir, store, _ada, category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let mut doc = store.load().unwrap();
        let bob = User::new("Bob", None);
        let bob_id = bob.id;
        doc.users.push(bob);
        store.save(&doc).unwrap();

        // Ada's category on Bob's entry
        let err = service.add(new_entry(bob_id, Some(category_id))).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_rejects_missing_category() {
        let (_temp_dir, store, user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let err = service
            .add(new_entry(user_id, Some(CategoryId::new())))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_sorted_descending() {
        let (_temp_dir, store, user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        for day in [1, 3, 2] {
            let mut entry = new_entry(user_id, None);
            entry.timestamp = Some(parse_timestamp(&format!("2025-01-0{day}")).unwrap());
            service.add(entry).unwrap();
        }

        let listed = service
            .list(&EntryFilter {
                user_id,
                category_id: None,
                start: None,
                end: None,
            })
            .unwrap();

        let days: Vec<u32> = listed
            .iter()
            .map(|e| chrono::Datelike::day(&e.timestamp))
            .collect();
        assert_eq!(days, vec![3, 2, 1]);
    }

    #[test]
    fn test_list_half_open_range() {
        let (_temp_dir, store, user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        for day in [1, 2, 3] {
            let mut entry = new_entry(user_id, None);
            entry.timestamp = Some(parse_timestamp(&format!("2025-01-0{day}")).unwrap());
            service.add(entry).unwrap();
        }

        let listed = service
            .list(&EntryFilter {
                user_id,
                category_id: None,
                start: Some(parse_timestamp("2025-01-02").unwrap()),
                end: Some(parse_timestamp("2025-01-03").unwrap()),
            })
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(chrono::Datelike::day(&listed[0].timestamp), 2);
    }

    #[test]
    fn test_list_filters_by_category() {
        let (_temp_dir, store, user_id, category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        service.add(new_entry(user_id, Some(category_id))).unwrap();
        service.add(new_entry(user_id, None)).unwrap();

        let listed = service
            .list(&EntryFilter {
                user_id,
                category_id: Some(category_id),
                start: None,
                end: None,
            })
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category_id, Some(category_id));
    }

    #[test]
    fn test_update_sets_updated_at() {
        let (_temp_dir, store, user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let entry = service.add(new_entry(user_id, None)).unwrap();
        let updated = service
            .update(
                entry.id,
                EntryPatch {
                    amount: Some(25.0),
                    note: Some("lunch".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount, 25.0);
        assert_eq!(updated.note.as_deref(), Some("lunch"));
        assert!(updated.updated_at.is_some());
        // Untouched fields survive
        assert_eq!(updated.kind, entry.kind);
        assert_eq!(updated.timestamp, entry.timestamp);
    }

    #[test]
    fn test_update_can_clear_category() {
        let (_temp_dir, store, user_id, category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let entry = service.add(new_entry(user_id, Some(category_id))).unwrap();
        let updated = service
            .update(
                entry.id,
                EntryPatch {
                    category_id: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.category_id.is_none());
    }

    #[test]
    fn test_update_missing_entry() {
        let (_temp_dir, store, _user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let err = service
            .update(EntryId::new(), EntryPatch::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, store, user_id, _category_id) = store_with_user_and_category();
        let service = EntryService::new(&store);

        let entry = service.add(new_entry(user_id, None)).unwrap();
        assert!(service.delete(entry.id).unwrap());
        assert!(!service.delete(entry.id).unwrap());
    }
}
