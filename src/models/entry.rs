//! Ledger entry model
//!
//! An entry is a single income or expense transaction belonging to a user,
//! optionally labeled with one of that user's categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, EntryId, UserId};

/// Whether an entry adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// The signed contribution of an amount under this kind
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single income or expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// The user who owns this entry
    pub user_id: UserId,

    /// The category labeling this entry; None when unset or orphaned
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Income or expense
    pub kind: EntryKind,

    /// Strictly positive amount; the kind carries the sign
    pub amount: f64,

    /// Free-form currency label (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// When the transaction occurred (normalized UTC)
    pub timestamp: DateTime<Utc>,

    /// Free-form note (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last updated; set only after the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Create a new entry; the timestamp defaults to now when not supplied
    pub fn new(
        user_id: UserId,
        category_id: Option<CategoryId>,
        kind: EntryKind,
        amount: f64,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntryId::new(),
            user_id,
            category_id,
            kind,
            amount,
            currency: None,
            timestamp: timestamp.unwrap_or(now),
            note: None,
            created_at: now,
            updated_at: None,
        }
    }

    /// The signed amount (income positive, expense negative)
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}
