//! Domain operations
//!
//! One service per entity plus the read-only balance queries. Services
//! borrow the store and run a full load -> mutate -> save cycle per call;
//! nothing is cached between calls. They expect validated input — the
//! dispatch layer screens raw input before anything here runs.

pub mod balance;
pub mod category;
pub mod entry;
pub mod user;

pub use balance::{BalanceService, BalanceSummary, PeriodBalance};
pub use category::CategoryService;
pub use entry::{EntryFilter, EntryPatch, EntryService, NewEntry};
pub use user::UserService;
