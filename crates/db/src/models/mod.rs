//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Query-parameter structs for list/search endpoints where applicable

pub mod asset;
pub mod catalog;
pub mod user;
