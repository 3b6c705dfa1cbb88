//! Named SQL templates with parameterized execution.
//!
//! A text blob carrying `-- name: X` marker comments parses into an
//! immutable [`Registry`]; each named statement then executes against a
//! caller-owned [`Connection`] with its `@placeholder` parameters resolved
//! from a [`ParameterBag`] before any SQL reaches the wire.
//!
//! # Examples
//!
//! ```
//! use namedsql::{Database, MemoryConnection, ParameterBag, Value};
//!
//! fn main() -> namedsql::Result<()> {
//!     let mut conn = MemoryConnection::new();
//!     conn.create_table("Clients", &["Id", "Name"])?;
//!     conn.insert("Clients", vec![Value::Integer(1), Value::Text("Ada".into())])?;
//!     conn.insert("Clients", vec![Value::Integer(4), Value::Text("Grace".into())])?;
//!
//!     let templates = "
//!         -- name: AllClients
//!         SELECT * FROM Clients;
//!
//!         -- name: OneClient
//!         SELECT * FROM Clients WHERE Id = @Id;
//!     ";
//!
//!     let mut db = Database::from_string(&mut conn, templates)?;
//!
//!     let one = db
//!         .query("OneClient", &ParameterBag::new().with("Id", 4))?
//!         .collect_result()?;
//!     assert_eq!(one.row_count(), 1);
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod core;
pub mod executor;
pub mod facade;
pub mod params;
pub mod registry;
pub mod result;

// Re-export the public surface for convenience
pub use connection::{BoundParam, Connection, MemoryConnection};
pub use core::{Result, Row, SqlError, Value};
pub use executor::QueryExecutor;
pub use facade::Database;
pub use params::ParameterBag;
pub use registry::{Registry, Statement};
pub use result::{QueryResult, Rows};
