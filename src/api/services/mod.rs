//! Services module - contains the DDL-to-schema extraction engine.

pub mod column_clause;
pub mod sql_parser;

// Re-export for convenience
pub use column_clause::parse_column;
pub use sql_parser::{SchemaParser, parse_sql_source};
