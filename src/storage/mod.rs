//! Persistence layer
//!
//! One JSON file, loaded fully on every read and rewritten fully on every
//! mutation. There is deliberately no cross-call cache: two back-to-back
//! operations each perform a full load.

pub mod store;

pub use store::JsonStore;
