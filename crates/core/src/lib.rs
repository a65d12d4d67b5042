//! Domain logic shared by the task service crates.
//!
//! Nothing in here touches the database or the network: it holds the
//! status set, the per-operation validation rules and the pagination
//! arithmetic so both the repository and the HTTP layer agree on them.

pub mod error;
pub mod pagination;
pub mod task;
pub mod types;
