//! Task status maintenance.
//!
//! Sets the status of a single task row identified by its id, stamping
//! `updated_at` every time and `started_at` only the first time. Task rows
//! are owned by an external system; this module never creates or deletes
//! them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The update operation in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
