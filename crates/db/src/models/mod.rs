//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the insert DTO or list parameters its repository
//! takes. Customer writes take `crm_core::customer::CustomerInput`.

pub mod customer;
pub mod role;
pub mod user;
