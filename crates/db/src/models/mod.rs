//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for create and full update
//! - A `Serialize` read DTO returned to clients

pub mod game;
