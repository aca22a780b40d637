use super::column_schema::ColumnSchema;
use serde::{Deserialize, Serialize};

/// Schema extracted from one `CREATE TABLE` statement.
///
/// Columns keep their left-to-right source order; the rendered report
/// relies on that order for its row order. The record is a pure
/// projection of the input text and is never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TableSchema {
    pub table_name: String,
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn new(table_name: String, columns: Vec<ColumnSchema>) -> Self {
        Self {
            table_name,
            columns,
        }
    }
}
