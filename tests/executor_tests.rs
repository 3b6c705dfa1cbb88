// Executor integration tests
//
// Runs named statements against a seeded in-memory backend.
// Run with: cargo test --test executor_tests

use namedsql::{
    MemoryConnection, ParameterBag, QueryExecutor, Registry, SqlError, Value,
};

const KIOSK_TEMPLATES: &str = "\n-- name: AllClients\nSELECT * FROM Clients;\n\n-- name: OneClient\nSELECT * FROM Clients\nWHERE Id = @Id;";

fn seeded_connection() -> MemoryConnection {
    let mut conn = MemoryConnection::new();
    conn.create_table("Clients", &["Id", "Name", "City"]).unwrap();
    conn.insert(
        "Clients",
        vec![
            Value::Integer(1),
            Value::Text("Ada".into()),
            Value::Text("London".into()),
        ],
    )
    .unwrap();
    conn.insert(
        "Clients",
        vec![
            Value::Integer(4),
            Value::Text("Grace".into()),
            Value::Text("Arlington".into()),
        ],
    )
    .unwrap();
    conn
}

#[test]
fn test_bound_parameter_filters_rows() {
    let registry = Registry::parse(KIOSK_TEMPLATES).unwrap();
    let mut conn = seeded_connection();
    let executor = QueryExecutor::new();

    let result = executor
        .execute(
            registry.get("OneClient").unwrap(),
            &ParameterBag::new().with("Id", 4),
            &mut conn,
        )
        .unwrap()
        .collect_result()
        .unwrap();

    assert_eq!(result.row_count(), 1);
    let name = result.column_index("Name").unwrap();
    assert_eq!(result.rows[0][name], Value::Text("Grace".into()));
}

#[test]
fn test_statement_without_filter_returns_everything() {
    let registry = Registry::parse(KIOSK_TEMPLATES).unwrap();
    let mut conn = seeded_connection();

    let result = QueryExecutor::new()
        .execute(
            registry.get("AllClients").unwrap(),
            &ParameterBag::new(),
            &mut conn,
        )
        .unwrap()
        .collect_result()
        .unwrap();

    assert_eq!(result.row_count(), 2);
}

#[test]
fn test_empty_bag_fails_before_execution() {
    let registry = Registry::parse(KIOSK_TEMPLATES).unwrap();
    let mut conn = seeded_connection();

    let err = QueryExecutor::new()
        .execute(
            registry.get("OneClient").unwrap(),
            &ParameterBag::new(),
            &mut conn,
        )
        .unwrap_err();

    assert!(matches!(err, SqlError::MissingParameter(name) if name == "Id"));
}

#[test]
fn test_float_parameter_matches_integer_column() {
    let registry = Registry::parse(KIOSK_TEMPLATES).unwrap();
    let mut conn = seeded_connection();

    let result = QueryExecutor::new()
        .execute(
            registry.get("OneClient").unwrap(),
            &ParameterBag::new().with("Id", 4.0),
            &mut conn,
        )
        .unwrap()
        .collect_result()
        .unwrap();

    assert_eq!(result.row_count(), 1);
}

#[test]
fn test_connection_failure_passes_through() {
    let registry =
        Registry::parse("-- name: Missing\nSELECT * FROM Nowhere;").unwrap();
    let mut conn = seeded_connection();

    let err = QueryExecutor::new()
        .execute(
            registry.get("Missing").unwrap(),
            &ParameterBag::new(),
            &mut conn,
        )
        .unwrap_err();

    assert!(matches!(err, SqlError::Execution(msg) if msg.contains("Nowhere")));
}

#[test]
fn test_rows_stream_lazily() {
    let registry = Registry::parse(KIOSK_TEMPLATES).unwrap();
    let mut conn = seeded_connection();

    let mut rows = QueryExecutor::new()
        .execute(
            registry.get("AllClients").unwrap(),
            &ParameterBag::new(),
            &mut conn,
        )
        .unwrap();

    assert_eq!(rows.columns().len(), 3);
    let first = rows.next().unwrap().unwrap();
    assert_eq!(first[0], Value::Integer(1));

    // Consuming the rest exhausts the stream for good.
    assert_eq!(rows.count(), 1);
}
