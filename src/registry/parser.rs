//! Template text parser.
//!
//! Splits a blob of SQL into named statements on `-- name: <identifier>`
//! marker lines and discovers `@placeholder` tokens in each body.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::{Result, SqlError};
use crate::registry::Statement;

lazy_static! {
    static ref MARKER: Regex = Regex::new(r"^\s*--\s*name\s*:(.*)$").unwrap();
    static ref IDENT: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    // String literals, quoted identifiers and comments are consumed before
    // the placeholder alternative, so tokens inside them never count.
    // A run of two or more `@` is a server variable, not a placeholder.
    static ref TOKEN: Regex = Regex::new(
        r#"(?s)'(?:[^']|'')*'|"[^"]*"|--[^\n]*|/\*.*?\*/|@+[A-Za-z_][A-Za-z0-9_]*"#
    )
    .unwrap();
}

/// Split `text` into statements. All-or-nothing: any malformed segment
/// fails the whole parse.
pub(crate) fn parse(text: &str) -> Result<Vec<Statement>> {
    let mut statements: Vec<Statement> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;
    let mut preamble_content: Option<usize> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;

        let Some(caps) = MARKER.captures(raw_line) else {
            match current.as_mut() {
                Some((_, body)) => body.push(raw_line),
                None => {
                    if preamble_content.is_none() && !raw_line.trim().is_empty() {
                        preamble_content = Some(line_no);
                    }
                }
            }
            continue;
        };

        if let Some(line) = preamble_content {
            return Err(SqlError::UnexpectedContent(line));
        }

        let name = caps[1].trim();
        if name.is_empty() {
            return Err(SqlError::EmptyName(line_no));
        }
        if !IDENT.is_match(name) {
            return Err(SqlError::InvalidName {
                name: name.to_string(),
                line: line_no,
            });
        }

        if let Some((done, body)) = current.take() {
            statements.push(seal(done, body)?);
        }
        if statements.iter().any(|s| s.name() == name) {
            return Err(SqlError::DuplicateName(name.to_string()));
        }
        current = Some((name.to_string(), Vec::new()));
    }

    match current.take() {
        Some((name, body)) => statements.push(seal(name, body)?),
        None => return Err(SqlError::NoStatements),
    }

    log::debug!("parsed {} named statement(s)", statements.len());
    Ok(statements)
}

fn seal(name: String, body: Vec<&str>) -> Result<Statement> {
    let sql = body.join("\n");
    if sql.trim().is_empty() {
        return Err(SqlError::EmptyStatement(name));
    }
    let placeholders = placeholders_in(&sql);
    Ok(Statement::new(name, sql, placeholders))
}

/// `@placeholder` names in order of first appearance, deduplicated.
pub(crate) fn placeholders_in(sql: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in TOKEN.find_iter(sql) {
        if let Some(name) = m.as_str().strip_prefix('@') {
            if name.starts_with('@') {
                continue;
            }
            if !found.iter().any(|f| f == name) {
                found.push(name.to_string());
            }
        }
    }
    found
}
