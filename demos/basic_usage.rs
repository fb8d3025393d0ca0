// ============================================================================
// Basic Usage Example
// ============================================================================

use nullable_float::prelude::*;
use quick_xml::Writer;
use rusqlite::Connection;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Nullable Float Example ===\n");

    let present = NullableFloat::new(21.5);
    let absent = NullableFloat::default();

    // Generic accessor
    println!("interface(): {:?} / {:?}", present.interface(), absent.interface());

    // JSON
    println!("\n=== JSON ===");
    println!("present: {}", present.marshal_json());
    println!("absent:  {}", absent.marshal_json());

    let mut decoded = NullableFloat::default();
    decoded.unmarshal_json(b"2.5")?;
    println!("decoded \"2.5\": {:?}", decoded.interface());

    if let Err(err) = decoded.unmarshal_json(b"abc") {
        println!("decoded \"abc\": {} (valid = {})", err, decoded.is_valid());
    }

    // XML
    println!("\n=== XML ===");
    println!("present element: {:?}", present.to_xml_element_string("celsius")?);
    println!("absent element:  {:?}", absent.to_xml_element_string("celsius")?);

    let mut writer = Writer::new(Vec::new());
    let mut elem = writer.create_element("reading");
    for (name, value) in [("celsius", present), ("humidity", absent)] {
        if let Some(attr) = value.marshal_xml_attr(name) {
            elem = elem.with_attribute(attr);
        }
    }
    elem.write_empty()?;
    println!("attributes: {}", String::from_utf8(writer.into_inner())?);

    // SQLite
    println!("\n=== SQLite ===");
    let conn = Connection::open_in_memory()?;
    conn.execute("CREATE TABLE readings (celsius REAL)", [])?;
    conn.execute("INSERT INTO readings (celsius) VALUES (?1)", [present])?;
    conn.execute("INSERT INTO readings (celsius) VALUES (?1)", [absent])?;

    let mut stmt = conn.prepare("SELECT celsius FROM readings")?;
    for row in stmt.query_map([], |row| row.get::<_, NullableFloat>(0))? {
        let value = row?;
        println!("row: {} (valid = {})", value, value.is_valid());
    }

    Ok(())
}
