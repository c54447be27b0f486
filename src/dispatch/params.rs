//! Per-operation input schemas
//!
//! Each operation declares its input as a serde struct plus a `validate()`
//! pass over format constraints (non-empty strings, email shape, positive
//! amount, enumerated kind). Both run before the document is loaded, so a
//! bad input never touches domain state.

use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::EntryKind;

/// Reject empty or whitespace-only strings
pub fn require_non_empty(field: &str, value: &str) -> LedgerResult<()> {
    if value.trim().is_empty() {
        return Err(LedgerError::Validation(format!(
            "{field} must be a non-empty string"
        )));
    }
    Ok(())
}

/// Minimal email shape check: one `@`, non-empty local part, dotted domain,
/// no whitespace
pub fn require_email(field: &str, value: &str) -> LedgerResult<()> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };
    if !valid {
        return Err(LedgerError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

/// Reject non-positive or non-finite amounts
pub fn require_positive(field: &str, value: f64) -> LedgerResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LedgerError::Validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

/// Treat an absent or empty-string optional as unset
pub fn non_empty_opt(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAddParams {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserAddParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("name", &self.name)?;
        if let Some(email) = non_empty_opt(&self.email) {
            require_email("email", email)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateParams {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserUpdateParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("id", &self.id)?;
        if let Some(name) = &self.name {
            require_non_empty("name", name)?;
        }
        if let Some(email) = non_empty_opt(&self.email) {
            require_email("email", email)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListParams {
    pub user_id: String,
}

impl CategoryListParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("userId", &self.user_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAddParams {
    pub user_id: String,
    pub name: String,
}

impl CategoryAddParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("userId", &self.user_id)?;
        require_non_empty("name", &self.name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdateParams {
    pub id: String,
    pub name: String,
}

impl CategoryUpdateParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryListParams {
    pub user_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl EntryListParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("userId", &self.user_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAddParams {
    pub user_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    pub kind: EntryKind,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl EntryAddParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("userId", &self.user_id)?;
        require_positive("amount", self.amount)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryUpdateParams {
    pub id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub kind: Option<EntryKind>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl EntryUpdateParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("id", &self.id)?;
        if let Some(amount) = self.amount {
            require_positive("amount", amount)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTotalParams {
    pub user_id: String,
    pub category_id: String,
}

impl BalanceTotalParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("userId", &self.user_id)?;
        require_non_empty("categoryId", &self.category_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePeriodParams {
    pub user_id: String,
    pub category_id: String,
    pub start: String,
    pub end: String,
}

impl BalancePeriodParams {
    pub fn validate(&self) -> LedgerResult<()> {
        require_non_empty("userId", &self.user_id)?;
        require_non_empty("categoryId", &self.category_id)?;
        require_non_empty("start", &self.start)?;
        require_non_empty("end", &self.end)
    }
}
