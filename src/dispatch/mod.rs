//! Operation dispatcher
//!
//! The single integration point with whatever transport invokes the
//! ledger: a name-based routing table from operation name to
//! (parse input -> validate -> run service -> serialize result). The
//! dispatcher is transport-agnostic and is exercised directly in tests.

pub mod params;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_timestamp, Category, CategoryId, Entry, EntryId, UserId};
use crate::services::{
    BalanceService, BalanceSummary, CategoryService, EntryFilter, EntryPatch, EntryService,
    NewEntry, PeriodBalance, UserService,
};
use crate::storage::JsonStore;

use params::{
    non_empty_opt, BalancePeriodParams, BalanceTotalParams, CategoryAddParams,
    CategoryListParams, CategoryUpdateParams, DeleteParams, EntryAddParams, EntryListParams,
    EntryUpdateParams, UserAddParams, UserUpdateParams,
};

/// The stable operation catalog; these names form the public surface
pub const OPERATIONS: &[&str] = &[
    "user.list",
    "user.add",
    "user.update",
    "user.delete",
    "category.list",
    "category.add",
    "category.update",
    "category.delete",
    "entry.list",
    "entry.add",
    "entry.update",
    "entry.delete",
    "balance.category.total",
    "balance.category.period",
];

/// Routes an operation name to its validate -> execute -> serialize pipeline
pub struct Dispatcher {
    store: JsonStore,
}

impl Dispatcher {
    /// Create a dispatcher over a store
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Whether an operation name is in the catalog
    pub fn supports(operation: &str) -> bool {
        OPERATIONS.contains(&operation)
    }

    /// Dispatch one operation. Unknown names fail with UnknownOperation
    /// without touching the store.
    pub fn dispatch(&self, operation: &str, input: Value) -> LedgerResult<Value> {
        match operation {
            "user.list" => to_result(UserService::new(&self.store).list()?),

            "user.add" => {
                let p: UserAddParams = parse_input(input)?;
                p.validate()?;
                let email = non_empty_opt(&p.email).map(str::to_owned);
                to_result(UserService::new(&self.store).add(p.name.trim(), email)?)
            }

            "user.update" => {
                let p: UserUpdateParams = parse_input(input)?;
                p.validate()?;
                let id = UserId::parse(&p.id)
                    .map_err(|_| LedgerError::user_not_found(p.id.clone()))?;
                let name = p.name.map(|n| n.trim().to_owned());
                let email = non_empty_opt(&p.email).map(str::to_owned);
                to_result(UserService::new(&self.store).update(id, name, email)?)
            }

            "user.delete" => {
                let p: DeleteParams = parse_input(input)?;
                let deleted = match UserId::parse(&p.id) {
                    Ok(id) => UserService::new(&self.store).delete(id)?,
                    Err(_) => false,
                };
                Ok(json!({ "deleted": deleted }))
            }

            "category.list" => {
                let p: CategoryListParams = parse_input(input)?;
                p.validate()?;
                match UserId::parse(&p.user_id) {
                    Ok(user_id) => to_result(CategoryService::new(&self.store).list(user_id)?),
                    // A malformed id names no user, so it matches nothing
                    Err(_) => to_result(Vec::<Category>::new()),
                }
            }

            "category.add" => {
                let p: CategoryAddParams = parse_input(input)?;
                p.validate()?;
                let user_id = UserId::parse(&p.user_id)
                    .map_err(|_| LedgerError::user_not_found(p.user_id.clone()))?;
                to_result(CategoryService::new(&self.store).add(user_id, p.name.trim())?)
            }

            "category.update" => {
                let p: CategoryUpdateParams = parse_input(input)?;
                p.validate()?;
                let id = CategoryId::parse(&p.id)
                    .map_err(|_| LedgerError::category_not_found(p.id.clone()))?;
                to_result(CategoryService::new(&self.store).update(id, p.name.trim().to_owned())?)
            }

            "category.delete" => {
                let p: DeleteParams = parse_input(input)?;
                let deleted = match CategoryId::parse(&p.id) {
                    Ok(id) => CategoryService::new(&self.store).delete(id)?,
                    Err(_) => false,
                };
                Ok(json!({ "deleted": deleted }))
            }

            "entry.list" => {
                let p: EntryListParams = parse_input(input)?;
                p.validate()?;

                let start = p.start.as_deref().map(parse_timestamp).transpose()?;
                let end = p.end.as_deref().map(parse_timestamp).transpose()?;

                let user_id = match UserId::parse(&p.user_id) {
                    Ok(id) => id,
                    Err(_) => return to_result(Vec::<Entry>::new()),
                };
                let category_id = match non_empty_opt(&p.category_id) {
                    Some(raw) => match CategoryId::parse(raw) {
                        Ok(id) => Some(id),
                        Err(_) => return to_result(Vec::<Entry>::new()),
                    },
                    None => None,
                };

                to_result(EntryService::new(&self.store).list(&EntryFilter {
                    user_id,
                    category_id,
                    start,
                    end,
                })?)
            }

            "entry.add" => {
                let p: EntryAddParams = parse_input(input)?;
                p.validate()?;

                let user_id = UserId::parse(&p.user_id)
                    .map_err(|_| LedgerError::user_not_found(p.user_id.clone()))?;
                let category_id = non_empty_opt(&p.category_id)
                    .map(|raw| {
                        CategoryId::parse(raw)
                            .map_err(|_| LedgerError::category_not_found(raw.to_owned()))
                    })
                    .transpose()?;
                let timestamp = p.timestamp.as_deref().map(parse_timestamp).transpose()?;

                to_result(EntryService::new(&self.store).add(NewEntry {
                    user_id,
                    category_id,
                    kind: p.kind,
                    amount: p.amount,
                    currency: non_empty_opt(&p.currency).map(str::to_owned),
                    timestamp,
                    note: p.note,
                })?)
            }

            "entry.update" => {
                let p: EntryUpdateParams = parse_input(input)?;
                p.validate()?;

                let id = EntryId::parse(&p.id)
                    .map_err(|_| LedgerError::entry_not_found(p.id.clone()))?;

                // A supplied-but-empty categoryId clears the reference
                let category_id = match &p.category_id {
                    Some(raw) if raw.trim().is_empty() => Some(None),
                    Some(raw) => Some(Some(CategoryId::parse(raw).map_err(|_| {
                        LedgerError::category_not_found(raw.clone())
                    })?)),
                    None => None,
                };
                let timestamp = p.timestamp.as_deref().map(parse_timestamp).transpose()?;

                to_result(EntryService::new(&self.store).update(
                    id,
                    EntryPatch {
                        category_id,
                        kind: p.kind,
                        amount: p.amount,
                        currency: p.currency,
                        timestamp,
                        note: p.note,
                    },
                )?)
            }

            "entry.delete" => {
                let p: DeleteParams = parse_input(input)?;
                let deleted = match EntryId::parse(&p.id) {
                    Ok(id) => EntryService::new(&self.store).delete(id)?,
                    Err(_) => false,
                };
                Ok(json!({ "deleted": deleted }))
            }

            "balance.category.total" => {
                let p: BalanceTotalParams = parse_input(input)?;
                p.validate()?;
                match (UserId::parse(&p.user_id), CategoryId::parse(&p.category_id)) {
                    (Ok(user_id), Ok(category_id)) => to_result(
                        BalanceService::new(&self.store).category_total(user_id, category_id)?,
                    ),
                    _ => to_result(BalanceSummary {
                        balance: 0.0,
                        count: 0,
                    }),
                }
            }

            "balance.category.period" => {
                let p: BalancePeriodParams = parse_input(input)?;
                p.validate()?;
                let start = parse_timestamp(&p.start)?;
                let end = parse_timestamp(&p.end)?;
                match (UserId::parse(&p.user_id), CategoryId::parse(&p.category_id)) {
                    (Ok(user_id), Ok(category_id)) => {
                        to_result(BalanceService::new(&self.store).category_period(
                            user_id,
                            category_id,
                            start,
                            end,
                        )?)
                    }
                    _ => to_result(PeriodBalance {
                        balance: 0.0,
                        count: 0,
                        start,
                        end,
                    }),
                }
            }

            other => Err(LedgerError::UnknownOperation(other.to_string())),
        }
    }

    /// Dispatch and wrap the outcome in the boundary envelope:
    /// `{"result": ...}` on success, `{"error": {"kind", "message"}}` on
    /// failure
    pub fn dispatch_envelope(&self, operation: &str, input: Value) -> Value {
        match self.dispatch(operation, input) {
            Ok(result) => json!({ "result": result }),
            Err(err) => json!({
                "error": { "kind": err.kind(), "message": err.to_string() }
            }),
        }
    }
}

fn parse_input<T: DeserializeOwned>(input: Value) -> LedgerResult<T> {
    serde_json::from_value(input).map_err(|e| LedgerError::Validation(e.to_string()))
}

fn to_result<T: Serialize>(value: T) -> LedgerResult<Value> {
    serde_json::to_value(value).map_err(|e| LedgerError::Io(e.to_string()))
}
