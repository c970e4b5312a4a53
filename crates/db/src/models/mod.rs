//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for the request bodies that create or
//!   update it
//!
//! JSON field names are camelCase.

pub mod client;
pub mod founder;
