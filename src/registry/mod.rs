//! Named statement registry.
//!
//! A [`Registry`] is built once from a template blob and is read-only from
//! then on. Statements keep their source order; names are case-sensitive
//! and unique.

mod parser;

use std::collections::HashMap;
use std::ops::Index;

use crate::core::{Result, SqlError};

/// A named, parameterized SQL statement. Immutable after parse.
#[derive(Debug, Clone)]
pub struct Statement {
    name: String,
    sql: String,
    placeholders: Vec<String>,
}

impl Statement {
    pub(crate) fn new(name: String, sql: String, placeholders: Vec<String>) -> Self {
        Self {
            name,
            sql,
            placeholders,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw SQL body: the marker line is stripped, everything else is kept
    /// verbatim.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// `@placeholder` names in order of first appearance, deduplicated.
    /// Tokens inside string literals, quoted identifiers, comments, and
    /// `@@` server variables do not count.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }
}

/// Ordered, read-only mapping from name to [`Statement`].
///
/// # Examples
///
/// ```
/// use namedsql::Registry;
///
/// # fn main() -> namedsql::Result<()> {
/// let registry = Registry::parse(
///     "-- name: AllClients\n\
///      SELECT * FROM Clients;",
/// )?;
///
/// let statement = registry.get("AllClients")?;
/// assert_eq!(statement.sql().trim(), "SELECT * FROM Clients;");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Registry {
    statements: Vec<Statement>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Parse a template blob into a registry.
    ///
    /// Statements are separated by `-- name: <identifier>` marker lines.
    /// The parse is all-or-nothing: no markers, an empty or non-identifier
    /// name, a repeated name, or a whitespace-only body anywhere fails the
    /// whole call.
    pub fn parse(text: &str) -> Result<Self> {
        let statements = parser::parse(text)?;
        let mut by_name = HashMap::with_capacity(statements.len());
        for (index, statement) in statements.iter().enumerate() {
            by_name.insert(statement.name().to_string(), index);
        }
        Ok(Self {
            statements,
            by_name,
        })
    }

    /// Look up a statement by name.
    pub fn get(&self, name: &str) -> Result<&Statement> {
        self.by_name
            .get(name)
            .map(|&index| &self.statements[index])
            .ok_or_else(|| SqlError::StatementNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// Statement names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(|s| s.name())
    }
}

impl Index<&str> for Registry {
    type Output = Statement;

    /// Subscript access by name.
    ///
    /// Panics when the name is absent; use [`Registry::get`] for the
    /// fallible form.
    fn index(&self, name: &str) -> &Statement {
        match self.get(name) {
            Ok(statement) => statement,
            Err(err) => panic!("{}", err),
        }
    }
}
