//! Application services for catalog introspection.

mod listing;

pub use listing::{REPORT_HEADER, TABLE_MARKER, TableLister, TableReport};
