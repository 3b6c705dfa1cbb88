//! High-level facade tying a parsed registry to a borrowed connection.

use crate::connection::Connection;
use crate::core::Result;
use crate::executor::QueryExecutor;
use crate::params::ParameterBag;
use crate::registry::{Registry, Statement};
use crate::result::Rows;

/// A statement book bound to a caller-owned connection.
///
/// The connection is injected and only borrowed; dropping the facade never
/// closes it, and pooling or transactions stay with the caller.
///
/// # Examples
///
/// ```
/// use namedsql::{Database, MemoryConnection, ParameterBag, Value};
///
/// # fn main() -> namedsql::Result<()> {
/// let mut conn = MemoryConnection::new();
/// conn.create_table("Clients", &["Id", "Name"])?;
/// conn.insert("Clients", vec![Value::Integer(4), Value::Text("Ada".into())])?;
///
/// let mut db = Database::from_string(
///     &mut conn,
///     "-- name: OneClient\n\
///      SELECT * FROM Clients WHERE Id = @Id;",
/// )?;
///
/// let result = db
///     .query("OneClient", &ParameterBag::new().with("Id", 4))?
///     .collect_result()?;
/// assert_eq!(result.row_count(), 1);
/// # Ok(())
/// # }
/// ```
pub struct Database<'conn, C: Connection> {
    conn: &'conn mut C,
    registry: Registry,
    executor: QueryExecutor,
}

impl<'conn, C: Connection> Database<'conn, C> {
    /// Parse `text` into a registry and bind it to `conn`.
    pub fn from_string(conn: &'conn mut C, text: &str) -> Result<Self> {
        Ok(Self::with_registry(conn, Registry::parse(text)?))
    }

    /// Bind an already-parsed registry to `conn`.
    pub fn with_registry(conn: &'conn mut C, registry: Registry) -> Self {
        Self {
            conn,
            registry,
            executor: QueryExecutor::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Look up a statement by name.
    pub fn get(&self, name: &str) -> Result<&Statement> {
        self.registry.get(name)
    }

    /// Look up `name` and execute it with `params`.
    pub fn query(&mut self, name: &str, params: &ParameterBag) -> Result<Rows<'_>> {
        let statement = self.registry.get(name)?;
        self.executor.execute(statement, params, &mut *self.conn)
    }
}
