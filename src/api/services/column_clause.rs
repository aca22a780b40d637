//! Column clause parser - turns one clause of a `CREATE TABLE` body into a
//! `ColumnSchema`.
//!
//! Clauses are tokenized (words, delimited identifiers, quoted strings,
//! parenthesized groups) and consumed by a short walk, so commas and quote
//! characters nested inside type arguments or literals are handled
//! structurally instead of by regex escaping.

use crate::api::models::{ColumnSchema, SkipReason};

/// Leading keywords that mark a table-level constraint clause rather than a
/// column declaration.
const CONSTRAINT_KEYWORDS: [&str; 7] = [
    "PRIMARY",
    "UNIQUE",
    "KEY",
    "INDEX",
    "CONSTRAINT",
    "FOREIGN",
    "CHECK",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClauseToken {
    /// Bareword: identifiers, keywords, numbers.
    Word(String),
    /// Backtick or double-quote delimited identifier, delimiters stripped.
    Delimited(String),
    /// Single-quoted string literal, inner text kept verbatim (escapes
    /// included).
    Str(String),
    /// Parenthesized group, inner text kept verbatim.
    Group(String),
    /// Any other single character.
    Symbol(char),
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}

/// Tokenize a single column-definition clause.
fn tokenize(clause: &str) -> Vec<ClauseToken> {
    let mut tokens = Vec::new();
    let mut chars = clause.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {}
            '`' | '"' => {
                let mut name = String::new();
                for inner in chars.by_ref() {
                    if inner == ch {
                        break;
                    }
                    name.push(inner);
                }
                tokens.push(ClauseToken::Delimited(name));
            }
            '\'' => {
                let mut text = String::new();
                while let Some(inner) = chars.next() {
                    match inner {
                        // Backslash escape: keep the escape sequence verbatim.
                        '\\' => {
                            text.push(inner);
                            if let Some(escaped) = chars.next() {
                                text.push(escaped);
                            }
                        }
                        // Doubled quote escape: keep both quotes, keep reading.
                        '\'' => {
                            if chars.peek() == Some(&'\'') {
                                text.push('\'');
                                text.push(chars.next().unwrap_or('\''));
                            } else {
                                break;
                            }
                        }
                        _ => text.push(inner),
                    }
                }
                tokens.push(ClauseToken::Str(text));
            }
            '(' => {
                let mut inner_text = String::new();
                let mut depth = 1;
                let mut in_string = false;
                while let Some(inner) = chars.next() {
                    match inner {
                        '\\' if in_string => {
                            inner_text.push(inner);
                            if let Some(escaped) = chars.next() {
                                inner_text.push(escaped);
                            }
                        }
                        '\'' => {
                            in_string = !in_string;
                            inner_text.push(inner);
                        }
                        '(' if !in_string => {
                            depth += 1;
                            inner_text.push(inner);
                        }
                        ')' if !in_string => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                            inner_text.push(inner);
                        }
                        _ => inner_text.push(inner),
                    }
                }
                tokens.push(ClauseToken::Group(inner_text));
            }
            c if is_word_char(c) => {
                let mut word = String::new();
                word.push(c);
                while let Some(&next) = chars.peek() {
                    if is_word_char(next) {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(ClauseToken::Word(word));
            }
            other => tokens.push(ClauseToken::Symbol(other)),
        }
    }

    tokens
}

/// Parse one column-definition clause into a `ColumnSchema`.
///
/// The clause must open with `<identifier> <identifier>` (name then type);
/// anything else is rejected with a `SkipReason`. Constraint clauses are
/// recognized by their leading keyword so they never masquerade as columns.
/// `NOT NULL`, `DEFAULT` and `COMMENT` are picked up in any order after the
/// type.
pub fn parse_column(clause: &str) -> Result<ColumnSchema, SkipReason> {
    let tokens = tokenize(clause);

    let column_name = match tokens.first() {
        Some(ClauseToken::Word(word)) => {
            if CONSTRAINT_KEYWORDS
                .iter()
                .any(|kw| word.eq_ignore_ascii_case(kw))
            {
                return Err(SkipReason::ConstraintClause);
            }
            word.clone()
        }
        // A delimited identifier is always a column name, even if it spells
        // a constraint keyword.
        Some(ClauseToken::Delimited(name)) if !name.is_empty() => name.clone(),
        _ => return Err(SkipReason::NoColumnPattern),
    };

    let column_type = match tokens.get(1) {
        Some(ClauseToken::Word(word)) => word.clone(),
        _ => return Err(SkipReason::NoColumnPattern),
    };

    let mut column = ColumnSchema::new(column_name, column_type);

    let mut idx = 2;
    if let Some(ClauseToken::Group(argument)) = tokens.get(idx) {
        let argument = argument.trim();
        // Only a plain integer argument counts as a length; ENUM-style value
        // lists and (precision, scale) pairs leave the length absent.
        if !argument.is_empty() && argument.bytes().all(|b| b.is_ascii_digit()) {
            column.column_length = Some(argument.to_string());
        }
        idx += 1;
    }

    while idx < tokens.len() {
        if let ClauseToken::Word(word) = &tokens[idx] {
            if word.eq_ignore_ascii_case("NOT")
                && matches!(
                    tokens.get(idx + 1),
                    Some(ClauseToken::Word(next)) if next.eq_ignore_ascii_case("NULL")
                )
            {
                column.not_null = true;
                idx += 2;
                continue;
            }
            if word.eq_ignore_ascii_case("DEFAULT") {
                match tokens.get(idx + 1) {
                    Some(ClauseToken::Word(value)) => {
                        column.default_value = Some(value.clone());
                    }
                    // Quoted defaults keep their quoting.
                    Some(ClauseToken::Str(value)) => {
                        column.default_value = Some(format!("'{}'", value));
                    }
                    // Negative numeric default: the sign is its own token.
                    Some(ClauseToken::Symbol('-')) => {
                        if let Some(ClauseToken::Word(value)) = tokens.get(idx + 2) {
                            column.default_value = Some(format!("-{}", value));
                            idx += 1;
                        }
                    }
                    _ => {}
                }
                idx += 2;
                continue;
            }
            if word.eq_ignore_ascii_case("COMMENT") {
                if let Some(ClauseToken::Str(text)) = tokens.get(idx + 1) {
                    column.comment = Some(text.clone());
                    idx += 2;
                    continue;
                }
            }
        }
        idx += 1;
    }

    Ok(column)
}
