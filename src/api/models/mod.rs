// Models module - contains TableSchema, ColumnSchema, and skip diagnostics

pub mod column_schema;
pub mod diagnostics;
pub mod table_schema;

pub use column_schema::ColumnSchema;
pub use diagnostics::{SkipReason, SkippedClause};
pub use table_schema::TableSchema;
