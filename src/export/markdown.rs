//! Markdown exporter for rendering table schemas as a readable report.

use crate::api::models::{ColumnSchema, TableSchema};

/// Exporter producing one heading plus one row-per-column table per schema.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Render the full report for a sequence of schemas, in order.
    pub fn export_report(tables: &[TableSchema]) -> String {
        let mut report = String::new();

        for table in tables {
            if !report.is_empty() {
                report.push('\n');
            }
            report.push_str(&Self::export_table(table));
        }

        report
    }

    /// Render one schema as a heading and a markdown table.
    pub fn export_table(table: &TableSchema) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", table.table_name));
        out.push_str("| Name | Type | Length | Required | Default | Comment |\n");
        out.push_str("| --- | --- | --- | --- | --- | --- |\n");

        let mut rows = 0;
        for column in &table.columns {
            // Legacy inputs can carry a PRIMARY/KEY pseudo-row; it is a
            // render-time skip, not a parse-time one.
            if Self::is_index_pseudo_row(column) {
                continue;
            }
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&column.column_name),
                Self::escape_cell(&column.column_type),
                column.column_length.as_deref().unwrap_or(""),
                if column.not_null { "yes" } else { "no" },
                Self::escape_cell(column.default_value.as_deref().unwrap_or("")),
                Self::escape_cell(column.comment.as_deref().unwrap_or("")),
            ));
            rows += 1;
        }

        if rows == 0 {
            out.push_str("\n_No columns recognized._\n");
        }

        out
    }

    /// Pseudo-row check: a "column" whose name reads PRIMARY and whose type
    /// reads KEY is an index marker, not data.
    fn is_index_pseudo_row(column: &ColumnSchema) -> bool {
        let name = column.column_name.to_uppercase();
        let column_type = column.column_type.to_uppercase();
        name.starts_with("PRIMARY") && column_type.starts_with("KEY")
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}
