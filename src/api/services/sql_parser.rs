//! SQL parser service for extracting table schemas from SQL CREATE statements.
//!
//! Statement boundaries come from the `sqlparser` tokenizer so that
//! semicolons inside string literals and comments never cause false splits;
//! a hand-rolled scanner takes over when tokenization fails, because
//! malformed SQL must degrade to opaque fragments rather than an error.
//! Extraction itself never raises: statements and clauses that cannot be
//! understood are dropped, optionally surfacing as skip diagnostics.

use regex::Regex;
use sqlparser::dialect::{Dialect, GenericDialect, dialect_from_str};
use sqlparser::tokenizer::{Location, Token, Tokenizer, Whitespace};
use tracing::{debug, info, warn};

use super::column_clause::parse_column;
use crate::api::models::{SkippedClause, TableSchema};

/// Parser turning raw SQL source text into ordered `TableSchema` records.
pub struct SchemaParser {
    /// Dialect used for tokenization (default: Generic).
    dialect: Box<dyn Dialect>,
    /// Dialect name this parser was created with, for logging.
    dialect_name: String,
}

impl SchemaParser {
    /// Create a parser with the generic dialect.
    pub fn new() -> Self {
        Self {
            dialect: Box::new(GenericDialect {}),
            dialect_name: "generic".to_string(),
        }
    }

    /// Create a parser with a dialect specified by name.
    ///
    /// Names are resolved through `sqlparser::dialect::dialect_from_str`
    /// (generic, mysql, postgres, mssql, sqlite, ...); unknown names fall
    /// back to the generic dialect.
    pub fn with_dialect_name(dialect_name: &str) -> Self {
        let dialect_name_lower = dialect_name.to_lowercase();

        let sqlparser_dialect_name = match dialect_name_lower.as_str() {
            "mssql" | "sqlserver" => "mssql",
            "postgres" => "postgresql",
            "other" => "generic",
            _ => &dialect_name_lower,
        };

        let dialect: Box<dyn Dialect> =
            dialect_from_str(sqlparser_dialect_name).unwrap_or_else(|| Box::new(GenericDialect {}));

        Self {
            dialect,
            dialect_name: dialect_name_lower,
        }
    }

    /// Parse SQL source text and extract all table schemas.
    ///
    /// Returns the tables in source order together with the diagnostics for
    /// every clause that produced no column. Malformed input yields fewer
    /// results, never an error.
    pub fn parse(&self, sql: &str) -> (Vec<TableSchema>, Vec<SkippedClause>) {
        let mut tables = Vec::new();
        let mut skipped = Vec::new();

        for statement in self.split_statements(sql) {
            if let Some((table, mut statement_skipped)) = self.extract_table(&statement) {
                tables.push(table);
                skipped.append(&mut statement_skipped);
            }
        }

        info!(
            "[SchemaParser] parsed {} tables from SQL ({} clauses skipped)",
            tables.len(),
            skipped.len()
        );
        (tables, skipped)
    }

    /// Split SQL source text into normalized top-level statements.
    ///
    /// Each returned statement is single-line: newlines are collapsed to
    /// spaces and surrounding whitespace is trimmed, so downstream matching
    /// can use single-line patterns.
    pub fn split_statements(&self, sql: &str) -> Vec<String> {
        let tokens = match Tokenizer::new(&*self.dialect, sql).tokenize_with_location() {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(
                    "[SchemaParser] tokenization failed with dialect '{}', using fallback splitter: {}",
                    self.dialect_name, e
                );
                return Self::split_statements_fallback(sql);
            }
        };

        // Statements are sliced out of the original source between the
        // token boundaries, never re-printed from the tokens: string
        // literals must keep their escape sequences exactly as written.
        let line_starts = Self::line_starts(sql);
        let mut statements = Vec::new();
        let mut current = String::new();
        let mut cursor = 0;
        for token in &tokens {
            match &token.token {
                Token::SemiColon => {
                    let start = Self::byte_offset(sql, &line_starts, token.span.start).max(cursor);
                    current.push_str(&sql[cursor..start]);
                    cursor = Self::byte_offset(sql, &line_starts, token.span.end).max(start);
                    let statement = Self::normalize_statement(&current);
                    if !statement.is_empty() {
                        statements.push(statement);
                    }
                    current.clear();
                }
                // Comments cannot terminate a statement and would corrupt
                // the single-line form, so they collapse to a space.
                Token::Whitespace(Whitespace::SingleLineComment { .. })
                | Token::Whitespace(Whitespace::MultiLineComment(_)) => {
                    let start = Self::byte_offset(sql, &line_starts, token.span.start).max(cursor);
                    current.push_str(&sql[cursor..start]);
                    current.push(' ');
                    cursor = Self::byte_offset(sql, &line_starts, token.span.end).max(start);
                }
                _ => {}
            }
        }
        current.push_str(&sql[cursor..]);
        let statement = Self::normalize_statement(&current);
        if !statement.is_empty() {
            statements.push(statement);
        }
        statements
    }

    /// Byte offsets at which each line of the source starts, for resolving
    /// tokenizer locations back into the source.
    fn line_starts(sql: &str) -> Vec<usize> {
        let mut starts = vec![0];
        for (idx, byte) in sql.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(idx + 1);
            }
        }
        starts
    }

    /// Resolve a 1-based tokenizer line/column location into a byte offset.
    /// Columns count characters, so the target line is walked char by char.
    fn byte_offset(sql: &str, line_starts: &[usize], location: Location) -> usize {
        let line_index = (location.line as usize).saturating_sub(1);
        let Some(&line_start) = line_starts.get(line_index) else {
            return sql.len();
        };

        let mut column = 1u64;
        let mut offset = line_start;
        for ch in sql[line_start..].chars() {
            if column == location.column || ch == '\n' {
                break;
            }
            offset += ch.len_utf8();
            column += 1;
        }
        offset
    }

    /// Quote- and comment-aware statement splitter used when the tokenizer
    /// rejects the input.
    fn split_statements_fallback(sql: &str) -> Vec<String> {
        let mut statements = Vec::new();
        let mut current = String::new();
        let mut string_char: Option<char> = None;
        let mut chars = sql.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\\' if string_char == Some('\'') => {
                    current.push(ch);
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                '\'' | '"' | '`' => {
                    match string_char {
                        Some(open) if open == ch => {
                            // Doubled single quote stays inside the literal.
                            if ch == '\'' && chars.peek() == Some(&'\'') {
                                current.push(ch);
                                current.push(chars.next().unwrap_or('\''));
                            } else {
                                string_char = None;
                                current.push(ch);
                            }
                        }
                        Some(_) => current.push(ch),
                        None => {
                            string_char = Some(ch);
                            current.push(ch);
                        }
                    }
                }
                '-' if string_char.is_none() && chars.peek() == Some(&'-') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                    current.push(' ');
                }
                '/' if string_char.is_none() && chars.peek() == Some(&'*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                    current.push(' ');
                }
                ';' if string_char.is_none() => {
                    let statement = Self::normalize_statement(&current);
                    if !statement.is_empty() {
                        statements.push(statement);
                    }
                    current.clear();
                }
                _ => current.push(ch),
            }
        }

        let statement = Self::normalize_statement(&current);
        if !statement.is_empty() {
            statements.push(statement);
        }
        statements
    }

    /// Collapse a statement to a single trimmed line.
    fn normalize_statement(statement: &str) -> String {
        statement
            .replace(['\n', '\r', '\t'], " ")
            .chars()
            .fold(String::new(), |mut acc, ch| {
                if ch == ' ' && acc.ends_with(' ') {
                    // Skip consecutive spaces
                    acc
                } else {
                    acc.push(ch);
                    acc
                }
            })
            .trim()
            .to_string()
    }

    /// Extract a table schema from one normalized statement.
    ///
    /// Returns `None` for statements that are not `CREATE TABLE` candidates
    /// or whose table name cannot be found. A recognized table with zero
    /// parseable columns still yields a schema record.
    pub fn extract_table(&self, statement: &str) -> Option<(TableSchema, Vec<SkippedClause>)> {
        let statement = statement.trim_start();
        // Candidate check is case-sensitive, matching the uppercase DDL
        // dumps this tool is fed.
        if !statement.starts_with("CREATE TABLE") {
            return None;
        }

        let header_re =
            Regex::new(r#"(?i)^CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?[`"]?([A-Za-z0-9_]+)"#)
                .unwrap();
        let captures = header_re.captures(statement)?;
        let table_name = captures.get(1)?.as_str().to_string();
        let header_end = captures.get(0)?.end();

        let mut columns = Vec::new();
        let mut skipped = Vec::new();

        if let Some(body) = Self::isolate_body(&statement[header_end..]) {
            for clause in Self::split_clauses(body) {
                match parse_column(&clause) {
                    Ok(column) => columns.push(column),
                    Err(reason) => {
                        debug!(
                            "[SchemaParser] skipping clause in table '{}' ({:?}): {}",
                            table_name, reason, clause
                        );
                        skipped.push(SkippedClause {
                            table_name: table_name.clone(),
                            clause,
                            reason,
                        });
                    }
                }
            }
        }

        Some((TableSchema::new(table_name, columns), skipped))
    }

    /// Slice out the column-definition list between the opening parenthesis
    /// after the table name and its matching close. Table-level options that
    /// follow the close (ENGINE, charset, collation) carry no column
    /// information and are discarded.
    fn isolate_body(after_header: &str) -> Option<&str> {
        let open = after_header.find('(')?;
        let body = &after_header[open + 1..];

        let mut depth = 1;
        let mut string_char: Option<char> = None;
        for (idx, ch) in body.char_indices() {
            match ch {
                '\'' | '"' | '`' => match string_char {
                    Some(open_quote) if open_quote == ch => string_char = None,
                    Some(_) => {}
                    None => string_char = Some(ch),
                },
                '(' if string_char.is_none() => depth += 1,
                ')' if string_char.is_none() => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&body[..idx]);
                    }
                }
                _ => {}
            }
        }

        // Unbalanced body: degrade to everything that is left.
        Some(body)
    }

    /// Split the column-definition list on top-level commas only, so type
    /// arguments such as `DECIMAL(10,2)` and quoted values such as
    /// `ENUM('a','b')` survive as one clause.
    fn split_clauses(body: &str) -> Vec<String> {
        let mut clauses = Vec::new();
        let mut current = String::new();
        let mut depth = 0;
        let mut string_char: Option<char> = None;
        let mut chars = body.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\\' if string_char == Some('\'') => {
                    current.push(ch);
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                '\'' | '"' | '`' => match string_char {
                    Some(open) if open == ch => {
                        if ch == '\'' && chars.peek() == Some(&'\'') {
                            current.push(ch);
                            current.push(chars.next().unwrap_or('\''));
                        } else {
                            string_char = None;
                            current.push(ch);
                        }
                    }
                    Some(_) => current.push(ch),
                    None => {
                        string_char = Some(ch);
                        current.push(ch);
                    }
                },
                '(' if string_char.is_none() => {
                    depth += 1;
                    current.push(ch);
                }
                ')' if string_char.is_none() => {
                    depth -= 1;
                    current.push(ch);
                }
                ',' if string_char.is_none() && depth == 0 => {
                    let clause = current.trim().to_string();
                    if !clause.is_empty() {
                        clauses.push(clause);
                    }
                    current.clear();
                }
                _ => current.push(ch),
            }
        }

        let clause = current.trim().to_string();
        if !clause.is_empty() {
            clauses.push(clause);
        }
        clauses
    }
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse SQL source text into ordered table schemas, discarding the skip
/// diagnostics. This is the plain entry point for renderers.
pub fn parse_sql_source(sql: &str) -> Vec<TableSchema> {
    SchemaParser::new().parse(sql).0
}
