use serde::{Deserialize, Serialize};

/// One column descriptor extracted from a `CREATE TABLE` clause.
///
/// A record is only ever emitted with a non-empty `column_name` and
/// `column_type`; clauses that fail that minimal pattern are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ColumnSchema {
    pub column_name: String,
    pub column_type: String,
    /// Parenthesized numeric type argument, e.g. `VARCHAR(255)` -> `"255"`.
    /// Absent for non-numeric argument lists such as `ENUM('a','b')`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_length: Option<String>,
    #[serde(default)]
    pub not_null: bool,
    /// Token following the `DEFAULT` keyword, quoting retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Single-quoted string following the `COMMENT` keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ColumnSchema {
    pub fn new(column_name: String, column_type: String) -> Self {
        Self {
            column_name,
            column_type,
            column_length: None,
            not_null: false,
            default_value: None,
            comment: None,
        }
    }
}
