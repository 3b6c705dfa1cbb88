//! The injected connection boundary.
//!
//! The executor never constructs, closes, or pools a connection; it borrows
//! a caller-owned handle for the duration of one call. Binding semantics,
//! transactions, and timeout or cancellation behavior belong to the
//! implementation.

pub mod memory;

pub use memory::MemoryConnection;

use crate::core::{Result, Value};
use crate::result::Rows;

/// One resolved placeholder handed to the connection, in order of first
/// appearance in the statement text.
#[derive(Debug, Clone, Copy)]
pub struct BoundParam<'a> {
    pub name: &'a str,
    pub value: &'a Value,
}

/// An externally owned handle that can execute parameterized SQL and
/// stream tabular results.
pub trait Connection {
    /// Execute `sql` with the given parameters. Every `@name` the
    /// statement references arrives resolved in `params`.
    fn run(&mut self, sql: &str, params: &[BoundParam<'_>]) -> Result<Rows<'_>>;
}
