//! Task store implementations.

pub mod memory;
pub mod postgres;
