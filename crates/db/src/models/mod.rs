//! Domain model structs and DTOs.
//!
//! The submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//! - The listing filter and the paginated page envelope

pub mod product;
