// Facade tests
//
// Mirrors the full client flow: open a connection, load the statement
// book from a string, query by name with a parameter object.
// Run with: cargo test --test facade_tests

use namedsql::{Database, MemoryConnection, ParameterBag, SqlError, Value};

const KIOSK_TEMPLATES: &str = "\n-- name: AllClients\nSELECT * FROM Clients;\n\n-- name: OneClient\nSELECT * FROM Clients\nWHERE Id = @Id;";

fn seeded_connection() -> MemoryConnection {
    let mut conn = MemoryConnection::new();
    conn.create_table("Clients", &["Id", "Name"]).unwrap();
    for (id, name) in [(1, "Ada"), (2, "Grace"), (4, "Edsger")] {
        conn.insert(
            "Clients",
            vec![Value::Integer(id), Value::Text(name.into())],
        )
        .unwrap();
    }
    conn
}

#[test]
fn test_full_lookup_flow() {
    let mut conn = seeded_connection();
    let mut db = Database::from_string(&mut conn, KIOSK_TEMPLATES).unwrap();

    let result = db
        .query("OneClient", &ParameterBag::new().with("Id", 4))
        .unwrap()
        .collect_result()
        .unwrap();

    assert_eq!(result.row_count(), 1);
    assert_eq!(result.rows[0][1], Value::Text("Edsger".into()));
}

#[test]
fn test_all_clients_returns_every_row() {
    let mut conn = seeded_connection();
    let mut db = Database::from_string(&mut conn, KIOSK_TEMPLATES).unwrap();

    let result = db
        .query("AllClients", &ParameterBag::new())
        .unwrap()
        .collect_result()
        .unwrap();

    assert_eq!(result.row_count(), 3);
}

#[test]
fn test_parameter_bag_from_serialize() {
    #[derive(serde::Serialize)]
    struct Lookup {
        #[serde(rename = "Id")]
        id: i64,
    }

    let mut conn = seeded_connection();
    let mut db = Database::from_string(&mut conn, KIOSK_TEMPLATES).unwrap();

    let params = ParameterBag::from_serialize(&Lookup { id: 2 }).unwrap();
    let result = db
        .query("OneClient", &params)
        .unwrap()
        .collect_result()
        .unwrap();

    assert_eq!(result.rows[0][1], Value::Text("Grace".into()));
}

#[test]
fn test_unknown_statement_name() {
    let mut conn = seeded_connection();
    let mut db = Database::from_string(&mut conn, KIOSK_TEMPLATES).unwrap();

    let err = db.query("TwoClients", &ParameterBag::new()).unwrap_err();
    assert!(matches!(err, SqlError::StatementNotFound(name) if name == "TwoClients"));
}

#[test]
fn test_missing_parameter_through_facade() {
    let mut conn = seeded_connection();
    let mut db = Database::from_string(&mut conn, KIOSK_TEMPLATES).unwrap();

    let err = db.query("OneClient", &ParameterBag::new()).unwrap_err();
    assert!(matches!(err, SqlError::MissingParameter(name) if name == "Id"));
}

#[test]
fn test_subscript_access_through_registry() {
    let mut conn = seeded_connection();
    let db = Database::from_string(&mut conn, KIOSK_TEMPLATES).unwrap();

    let statement = &db.registry()["OneClient"];
    assert!(statement.sql().contains("WHERE Id = @Id"));
}
