//! Statement execution: placeholder resolution and dispatch.

use crate::connection::{BoundParam, Connection};
use crate::core::{Result, SqlError};
use crate::params::ParameterBag;
use crate::registry::Statement;
use crate::result::Rows;

/// Resolves a statement's placeholders against a [`ParameterBag`] and hands
/// the SQL to the connection's native parameterized execution.
///
/// The executor owns template resolution and parameter-name validation
/// only; binding, transactions, and pooling stay with the connection.
#[derive(Debug, Default)]
pub struct QueryExecutor;

impl QueryExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Execute one statement against `conn`.
    ///
    /// Every placeholder must have a value in `params` or the call fails
    /// with [`SqlError::MissingParameter`] before anything reaches the
    /// connection. Bag entries the statement never references are ignored.
    /// The returned row stream borrows the connection until it is dropped.
    pub fn execute<'conn, C: Connection>(
        &self,
        statement: &Statement,
        params: &ParameterBag,
        conn: &'conn mut C,
    ) -> Result<Rows<'conn>> {
        let mut bound = Vec::with_capacity(statement.placeholders().len());
        for name in statement.placeholders() {
            let value = params
                .get(name)
                .ok_or_else(|| SqlError::MissingParameter(name.clone()))?;
            bound.push(BoundParam { name, value });
        }

        log::debug!(
            "executing '{}' with {} bound parameter(s)",
            statement.name(),
            bound.len()
        );
        conn.run(statement.sql(), &bound)
    }
}
