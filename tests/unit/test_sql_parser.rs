//! Unit tests for the SQL schema parser service.

use sql_schema_api::models::SkipReason;
use sql_schema_api::parse_sql_source;
use sql_schema_api::services::SchemaParser;

#[test]
fn test_parse_end_to_end_scenario() {
    let sql = "CREATE TABLE users (id INT NOT NULL, name VARCHAR(50) DEFAULT 'anon' COMMENT 'display name', PRIMARY KEY (id)) ENGINE=InnoDB;";

    let tables = parse_sql_source(sql);
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(table.table_name, "users");
    assert_eq!(table.columns.len(), 2);

    let id = &table.columns[0];
    assert_eq!(id.column_name, "id");
    assert_eq!(id.column_type, "INT");
    assert_eq!(id.column_length, None);
    assert!(id.not_null);
    assert_eq!(id.default_value, None);
    assert_eq!(id.comment, None);

    let name = &table.columns[1];
    assert_eq!(name.column_name, "name");
    assert_eq!(name.column_type, "VARCHAR");
    assert_eq!(name.column_length.as_deref(), Some("50"));
    assert!(!name.not_null);
    assert_eq!(name.default_value.as_deref(), Some("'anon'"));
    assert_eq!(name.comment.as_deref(), Some("display name"));
}

#[test]
fn test_parse_multiline_statement_with_comments() {
    let sql = r#"
        -- user accounts
        CREATE TABLE accounts (
            id INT NOT NULL, -- surrogate key
            email VARCHAR(255)
        );
    "#;

    let tables = parse_sql_source(sql);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].table_name, "accounts");
    assert_eq!(tables[0].columns.len(), 2);
    assert_eq!(tables[0].columns[1].column_name, "email");
}

#[test]
fn test_parse_backticked_table_name() {
    let tables = parse_sql_source("CREATE TABLE `orders` (id INT);");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].table_name, "orders");
}

#[test]
fn test_statement_order_is_preserved() {
    let sql = r#"
        CREATE TABLE users (id INT);
        INSERT INTO users VALUES (1);
        CREATE TABLE orders (id INT, user_id INT);
    "#;

    let tables = parse_sql_source(sql);
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].table_name, "users");
    assert_eq!(tables[1].table_name, "orders");
}

#[test]
fn test_semicolon_inside_literal_does_not_split() {
    let sql = "INSERT INTO logs VALUES ('a;b'); CREATE TABLE t (id INT);";

    let parser = SchemaParser::new();
    let statements = parser.split_statements(sql);
    assert_eq!(statements.len(), 2);

    let tables = parse_sql_source(sql);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].table_name, "t");
}

#[test]
fn test_doubled_quote_escape_survives_statement_splitting() {
    let sql = "CREATE TABLE notes (note TEXT COMMENT 'it''s fine'); CREATE TABLE t (id INT);";

    let tables = parse_sql_source(sql);
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].columns.len(), 1);
    assert_eq!(tables[0].columns[0].comment.as_deref(), Some("it''s fine"));
}

#[test]
fn test_backslash_escape_survives_with_mysql_dialect() {
    let parser = SchemaParser::with_dialect_name("mysql");
    let (tables, _) = parser.parse(r"CREATE TABLE notes (note TEXT COMMENT 'it\'s fine');");

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].columns[0].comment.as_deref(), Some(r"it\'s fine"));
}

#[test]
fn test_lowercase_create_table_is_not_a_candidate() {
    let tables = parse_sql_source("create table users (id INT);");
    assert!(tables.is_empty());
}

#[test]
fn test_create_table_without_name_is_dropped() {
    let tables = parse_sql_source("CREATE TABLE (id INT);");
    assert!(tables.is_empty());
}

#[test]
fn test_decimal_arguments_do_not_split_clauses() {
    let tables = parse_sql_source("CREATE TABLE prices (total DECIMAL(10,2) NOT NULL, note TEXT);");
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[0].column_name, "total");
    assert_eq!(table.columns[0].column_type, "DECIMAL");
    // A (precision, scale) pair is not a plain length.
    assert_eq!(table.columns[0].column_length, None);
    assert!(table.columns[0].not_null);
}

#[test]
fn test_enum_value_list_is_not_a_length() {
    let tables = parse_sql_source("CREATE TABLE things (state ENUM('new','old') NOT NULL);");
    assert_eq!(tables[0].columns.len(), 1);
    assert_eq!(tables[0].columns[0].column_type, "ENUM");
    assert_eq!(tables[0].columns[0].column_length, None);
}

#[test]
fn test_constraint_clauses_never_become_columns() {
    let sql = "CREATE TABLE t (
        id INT NOT NULL,
        PRIMARY KEY (id),
        UNIQUE KEY uq_id (id),
        KEY idx_id (id),
        INDEX idx_other (id),
        CONSTRAINT fk FOREIGN KEY (id) REFERENCES other(id),
        FOREIGN KEY (id) REFERENCES other(id)
    );";

    let parser = SchemaParser::new();
    let (tables, skipped) = parser.parse(sql);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].columns.len(), 1);
    assert_eq!(tables[0].columns[0].column_name, "id");

    assert_eq!(skipped.len(), 6);
    assert!(
        skipped
            .iter()
            .all(|s| s.reason == SkipReason::ConstraintClause && s.table_name == "t")
    );
}

#[test]
fn test_table_with_no_recognizable_columns_is_still_emitted() {
    let parser = SchemaParser::new();
    let (tables, skipped) = parser.parse("CREATE TABLE pivot (PRIMARY KEY (a, b));");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].table_name, "pivot");
    assert!(tables[0].columns.is_empty());
    assert_eq!(skipped.len(), 1);
}

#[test]
fn test_parse_is_idempotent() {
    let sql = "CREATE TABLE users (id INT NOT NULL, name VARCHAR(50) DEFAULT 'anon');";
    let first = parse_sql_source(sql);
    let second = parse_sql_source(sql);
    assert_eq!(first, second);
}

#[test]
fn test_parse_empty_input() {
    let parser = SchemaParser::new();
    let (tables, skipped) = parser.parse("");
    assert!(tables.is_empty());
    assert!(skipped.is_empty());
}

#[test]
fn test_unbalanced_body_degrades_gracefully() {
    // Missing closing paren: the parser keeps whatever columns it can see.
    let tables = parse_sql_source("CREATE TABLE broken (id INT, name TEXT");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].columns.len(), 2);
}

#[test]
fn test_if_not_exists_header() {
    let tables = parse_sql_source("CREATE TABLE IF NOT EXISTS users (id INT);");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].table_name, "users");
}

#[test]
fn test_mysql_dialect_name() {
    let parser = SchemaParser::with_dialect_name("mysql");
    let (tables, _) = parser.parse("CREATE TABLE `users` (`id` INT NOT NULL);");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].columns[0].column_name, "id");
}
