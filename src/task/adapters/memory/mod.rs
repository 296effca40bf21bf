//! In-memory task store for tests.

mod store;

pub use store::InMemoryTaskStore;
