//! Core data models
//!
//! Typed records for the three entities (users, categories, entries), the
//! aggregate document they live in, strongly-typed ids, and timestamp
//! normalization.

pub mod category;
pub mod document;
pub mod entry;
pub mod ids;
pub mod timestamp;
pub mod user;

pub use category::Category;
pub use document::Document;
pub use entry::{Entry, EntryKind};
pub use ids::{CategoryId, EntryId, UserId};
pub use timestamp::parse_timestamp;
pub use user::User;
