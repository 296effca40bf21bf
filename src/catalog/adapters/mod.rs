//! Catalog port implementations.

pub mod memory;
pub mod postgres;
