//! Schema catalog introspection.
//!
//! Lists the table names of one schema through `information_schema`. The
//! module follows the same hexagonal split as [`crate::task`]:
//!
//! - Value types in [`domain`]
//! - The catalog port in [`ports`]
//! - `PostgreSQL` and in-memory implementations in [`adapters`]
//! - The listing operation and its report in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
