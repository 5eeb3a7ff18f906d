//! Derive a schema from a Rust type and check serialized instances.
//!
//! Run with: `cargo run -p value-schema-demos --example derive_schema`

use serde::Serialize;
use value_schema_core::{DynamicValue, Schematic, impl_schematic, validate};

#[derive(Serialize)]
struct Visit {
    date: String,
    ward: Option<u32>,
}

impl_schematic!(Visit {
    date: String,
    ward: Option<u32>,
});

#[derive(Serialize)]
struct Patient {
    name: String,
    visits: Vec<Visit>,
}

impl_schematic!(Patient {
    name: String,
    visits: Vec<Visit>,
});

fn main() -> Result<(), value_schema_core::Error> {
    let schema = Patient::schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);

    let patient = Patient {
        name: "Susan".into(),
        visits: vec![
            Visit {
                date: "0-0".into(),
                ward: Some(3),
            },
            Visit {
                date: "0-1".into(),
                ward: None,
            },
        ],
    };
    let value = DynamicValue::from_serialize(&patient)?;
    println!("serialized patient conforms: {}", validate(&value, &schema));

    let tampered = DynamicValue::from_json_str(r#"{"name": "Susan", "visits": [{"date": 1}]}"#)?;
    println!("tampered patient conforms: {}", validate(&tampered, &schema));
    Ok(())
}
