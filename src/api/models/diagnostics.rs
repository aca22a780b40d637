use serde::{Deserialize, Serialize};

/// Why a clause was left out of a table's column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Table-level constraint clause (PRIMARY KEY, INDEX, FOREIGN KEY, ...).
    ConstraintClause,
    /// Clause did not match the minimal `<identifier> <identifier>` pattern.
    NoColumnPattern,
}

/// Diagnostic record for a clause that produced no column.
///
/// Dropping unmatched clauses stays non-fatal; callers may surface
/// these alongside the parsed tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SkippedClause {
    pub table_name: String,
    pub clause: String,
    pub reason: SkipReason,
}
