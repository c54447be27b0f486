//! Balance aggregation
//!
//! Read-only queries over a (user, category) pair: a signed total across
//! all matching entries, and the same restricted to a half-open
//! [start, end) period. Income counts positive, expense negative.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::LedgerResult;
use crate::models::{CategoryId, Entry, UserId};
use crate::storage::JsonStore;

/// Signed total and matching-entry count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSummary {
    pub balance: f64,
    pub count: usize,
}

/// Period-bounded balance, echoing the normalized bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBalance {
    pub balance: f64,
    pub count: usize,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Read-only balance queries
pub struct BalanceService<'a> {
    store: &'a JsonStore,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Signed sum over all entries matching the user and category
    pub fn category_total(
        &self,
        user_id: UserId,
        category_id: CategoryId,
    ) -> LedgerResult<BalanceSummary> {
        let doc = self.store.load()?;
        let (balance, count) = sum_signed(
            doc.entries
                .iter()
                .filter(|e| e.user_id == user_id && e.category_id == Some(category_id)),
        );
        Ok(BalanceSummary { balance, count })
    }

    /// Signed sum over entries matching the user and category with
    /// timestamp in [start, end)
    pub fn category_period(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> LedgerResult<PeriodBalance> {
        let doc = self.store.load()?;
        let (balance, count) = sum_signed(doc.entries.iter().filter(|e| {
            e.user_id == user_id
                && e.category_id == Some(category_id)
                && e.timestamp >= start
                && e.timestamp < end
        }));
        Ok(PeriodBalance {
            balance,
            count,
            start,
            end,
        })
    }
}

fn sum_signed<'e>(entries: impl Iterator<Item = &'e Entry>) -> (f64, usize) {
    let mut balance = 0.0;
    let mut count = 0;
    for entry in entries {
        balance += entry.signed_amount();
        count += 1;
    }
    (balance, count)
}
