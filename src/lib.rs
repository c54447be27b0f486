//! ledgerkeep - JSON-backed personal finance ledger
//!
//! The whole ledger lives in one JSON document holding three collections
//! (users, categories, entries). Callers interact through a catalog of
//! named operations — CRUD over each entity plus two balance aggregation
//! queries — routed by the [`dispatch::Dispatcher`].
//!
//! # Architecture
//!
//! - `config`: store path resolution
//! - `error`: the error taxonomy surfaced across the boundary
//! - `models`: entity records, ids, timestamp normalization
//! - `storage`: full-document load/save against the JSON file
//! - `services`: the domain operations (CRUD + balances)
//! - `dispatch`: input schemas, validation, and name-based routing
//!
//! # Example
//!
//! ```rust,no_run
//! use ledgerkeep::config::StoreConfig;
//! use ledgerkeep::dispatch::Dispatcher;
//! use ledgerkeep::storage::JsonStore;
//!
//! let config = StoreConfig::from_env();
//! let dispatcher = Dispatcher::new(JsonStore::new(config.store_file()));
//! let response = dispatcher.dispatch_envelope(
//!     "user.add",
//!     serde_json::json!({ "name": "Ada" }),
//! );
//! println!("{response}");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
