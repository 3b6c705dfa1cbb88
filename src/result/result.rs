use crate::core::{Result, Row};

/// Streaming row sequence borrowed from a connection for one call.
///
/// Finite and non-restartable: consuming the iterator exhausts the query.
/// Rows surface as `Result<Row>` so a connection can report a failure
/// mid-stream.
pub struct Rows<'conn> {
    columns: Vec<String>,
    inner: Box<dyn Iterator<Item = Result<Row>> + 'conn>,
}

impl<'conn> Rows<'conn> {
    pub fn new(columns: Vec<String>, inner: Box<dyn Iterator<Item = Result<Row>> + 'conn>) -> Self {
        Self { columns, inner }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Drain the stream into a materialized [`QueryResult`].
    pub fn collect_result(self) -> Result<QueryResult> {
        let Rows { columns, inner } = self;
        let rows = inner.collect::<Result<Vec<Row>>>()?;
        Ok(QueryResult::new(columns, rows))
    }
}

impl std::fmt::Debug for Rows<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rows")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[derive(Debug)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn print(&self) {
        if self.columns.is_empty() {
            println!("Empty result set");
            return;
        }

        // Column widths from header and data
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                widths[i] = widths[i].max(value.to_string().len());
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{:width$}", col, width = widths[i]))
            .collect();
        println!("{}", header.join(" | "));

        let separator: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        println!("{}", separator);

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, value)| format!("{:width$}", value.to_string(), width = widths[i]))
                .collect();
            println!("{}", cells.join(" | "));
        }

        println!("\n{} row(s)", self.rows.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SqlError, Value};

    fn sample_rows() -> Rows<'static> {
        let rows: Vec<Result<Row>> = vec![
            Ok(vec![Value::Integer(1), Value::Text("Ada".into())]),
            Ok(vec![Value::Integer(2), Value::Text("Grace".into())]),
        ];
        Rows::new(
            vec!["Id".to_string(), "Name".to_string()],
            Box::new(rows.into_iter()),
        )
    }

    #[test]
    fn test_rows_stream_and_collect() {
        let mut rows = sample_rows();
        assert_eq!(rows.columns(), ["Id".to_string(), "Name".to_string()]);

        let first = rows.next().unwrap().unwrap();
        assert_eq!(first[0], Value::Integer(1));

        // The remainder still collects; the stream never restarts.
        let rest: Vec<Row> = rows.map(|r| r.unwrap()).collect();
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_collect_result() {
        let result = sample_rows().collect_result().unwrap();
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.column_index("Name"), Some(1));
        assert_eq!(result.column_index("Nope"), None);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_collect_result_propagates_stream_error() {
        let rows: Vec<Result<Row>> = vec![
            Ok(vec![Value::Integer(1)]),
            Err(SqlError::Execution("connection dropped".into())),
        ];
        let rows = Rows::new(vec!["Id".to_string()], Box::new(rows.into_iter()));
        assert!(matches!(
            rows.collect_result(),
            Err(SqlError::Execution(_))
        ));
    }
}
