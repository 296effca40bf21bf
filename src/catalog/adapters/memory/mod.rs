//! In-memory catalog for tests.

mod catalog;

pub use catalog::InMemoryTableCatalog;
