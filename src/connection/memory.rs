//! In-memory connection for tests and demo programs.
//!
//! Serves the statement shape the bundled templates use: `SELECT *` from a
//! single table with an optional equality filter against a parameter or a
//! literal. Everything else reports an execution error, the same way a real
//! driver would surface an unsupported statement.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::{BoundParam, Connection};
use crate::core::{Result, Row, SqlError, Value};
use crate::result::Rows;

lazy_static! {
    static ref SELECT: Regex = Regex::new(
        r"(?is)^\s*select\s+\*\s+from\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:where\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(@[A-Za-z_][A-Za-z0-9_]*|'[^']*'|-?\d+(?:\.\d+)?)\s*)?;?\s*$"
    )
    .unwrap();
}

struct MemTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

/// Seeded, table-per-name in-memory backend.
///
/// # Examples
///
/// ```
/// use namedsql::{Connection, MemoryConnection, Value};
///
/// # fn main() -> namedsql::Result<()> {
/// let mut conn = MemoryConnection::new();
/// conn.create_table("Clients", &["Id", "Name"])?;
/// conn.insert("Clients", vec![Value::Integer(4), Value::Text("Ada".into())])?;
///
/// let rows = conn.run("SELECT * FROM Clients", &[])?;
/// assert_eq!(rows.count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MemoryConnection {
    tables: HashMap<String, MemTable>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_table(&mut self, name: impl Into<String>, columns: &[&str]) -> Result<()> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(SqlError::Execution(format!(
                "table '{}' already exists",
                name
            )));
        }
        self.tables.insert(
            name,
            MemTable {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                rows: Vec::new(),
            },
        );
        Ok(())
    }

    pub fn insert(&mut self, table: &str, row: Row) -> Result<()> {
        let t = self
            .tables
            .get_mut(table)
            .ok_or_else(|| SqlError::Execution(format!("table '{}' not found", table)))?;
        if row.len() != t.columns.len() {
            return Err(SqlError::Execution(format!(
                "table '{}' expects {} column(s), got {}",
                table,
                t.columns.len(),
                row.len()
            )));
        }
        t.rows.push(row);
        Ok(())
    }
}

impl Connection for MemoryConnection {
    fn run(&mut self, sql: &str, params: &[BoundParam<'_>]) -> Result<Rows<'_>> {
        let caps = SELECT
            .captures(sql)
            .ok_or_else(|| SqlError::Execution(format!("unsupported statement: {}", sql.trim())))?;

        let table_name = &caps[1];
        let table = self
            .tables
            .get(table_name)
            .ok_or_else(|| SqlError::Execution(format!("table '{}' not found", table_name)))?;

        let matched: Vec<Row> = match (caps.get(2), caps.get(3)) {
            (Some(column), Some(rhs)) => {
                let index = table
                    .columns
                    .iter()
                    .position(|c| c == column.as_str())
                    .ok_or_else(|| {
                        SqlError::Execution(format!(
                            "column '{}' not found in '{}'",
                            column.as_str(),
                            table_name
                        ))
                    })?;
                let wanted = resolve_rhs(rhs.as_str(), params)?;
                table
                    .rows
                    .iter()
                    .filter(|row| row[index] == wanted)
                    .cloned()
                    .collect()
            }
            _ => table.rows.clone(),
        };

        log::trace!("matched {} row(s) in '{}'", matched.len(), table_name);
        Ok(Rows::new(
            table.columns.clone(),
            Box::new(matched.into_iter().map(Ok)),
        ))
    }
}

fn resolve_rhs(rhs: &str, params: &[BoundParam<'_>]) -> Result<Value> {
    if let Some(name) = rhs.strip_prefix('@') {
        return params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.clone())
            .ok_or_else(|| SqlError::Execution(format!("unbound parameter '@{}'", name)));
    }
    if let Some(inner) = rhs.strip_prefix('\'') {
        return Ok(Value::Text(inner.trim_end_matches('\'').to_string()));
    }
    if rhs.contains('.') {
        rhs.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| SqlError::Execution(format!("bad literal '{}'", rhs)))
    } else {
        rhs.parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| SqlError::Execution(format!("bad literal '{}'", rhs)))
    }
}
