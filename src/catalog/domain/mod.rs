//! Domain values for catalog introspection.

mod names;

pub use names::{SchemaName, TableName};
