// Kiosk client lookup: seed an in-memory Clients table, load the statement
// book from a string, then run the named queries.
//
// Run with: cargo run --example kiosk_clients

use anyhow::Result;
use namedsql::{Database, MemoryConnection, ParameterBag, Value};

fn main() -> Result<()> {
    let mut conn = MemoryConnection::new();
    conn.create_table("Clients", &["Id", "Name", "City"])?;
    conn.insert(
        "Clients",
        vec![Value::Integer(1), "Ada".into(), "London".into()],
    )?;
    conn.insert(
        "Clients",
        vec![Value::Integer(2), "Grace".into(), "Arlington".into()],
    )?;
    conn.insert(
        "Clients",
        vec![Value::Integer(4), "Edsger".into(), "Austin".into()],
    )?;

    let templates = "
        -- name: AllClients
        SELECT * FROM Clients;

        -- name: OneClient
        SELECT * FROM Clients
        WHERE Id = @Id;
    ";

    let mut db = Database::from_string(&mut conn, templates)?;

    println!("All clients:");
    let all = db.query("AllClients", &ParameterBag::new())?.collect_result()?;
    all.print();

    println!("\nClient 4:");
    let one = db
        .query("OneClient", &ParameterBag::new().with("Id", 4))?
        .collect_result()?;
    one.print();

    Ok(())
}
