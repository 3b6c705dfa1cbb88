// Parameter bags built from JSON documents and from Serialize structs.
//
// Run with: cargo run --example json_params

use anyhow::Result;
use namedsql::{Database, MemoryConnection, ParameterBag, Value};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct ClientLookup {
    #[serde(rename = "Id")]
    id: i64,
}

fn main() -> Result<()> {
    let mut conn = MemoryConnection::new();
    conn.create_table("Clients", &["Id", "Name"])?;
    conn.insert("Clients", vec![Value::Integer(2), "Grace".into()])?;
    conn.insert("Clients", vec![Value::Integer(3), "Edsger".into()])?;

    let mut db = Database::from_string(
        &mut conn,
        "-- name: OneClient\n\
         SELECT * FROM Clients WHERE Id = @Id;",
    )?;

    // A bag straight out of a JSON document, e.g. a request body.
    let from_json = ParameterBag::from_json(&json!({ "Id": 2 }))?;
    db.query("OneClient", &from_json)?.collect_result()?.print();

    // The same thing from a plain struct.
    let from_struct = ParameterBag::from_serialize(&ClientLookup { id: 3 })?;
    db.query("OneClient", &from_struct)?.collect_result()?.print();

    Ok(())
}
