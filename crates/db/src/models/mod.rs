//! Domain model structs and DTOs.
//!
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs, validated into the inputs the repository accepts

pub mod task;
