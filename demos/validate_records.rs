//! Validate patient records read as JSON.
//!
//! Run with: `cargo run -p value-schema-demos --example validate_records`

use serde_json::json;
use value_schema_core::{DynamicValue, SchemaNode, ValidationConfig, Validator, extend_fields};

fn main() {
    let named_id = SchemaNode::object([
        ("name", SchemaNode::string()),
        ("id", SchemaNode::number()),
    ]);
    let hospital = SchemaNode::object(extend_fields(
        &named_id,
        [("location", SchemaNode::string())],
    ));
    let patient = SchemaNode::object(extend_fields(
        &named_id,
        [
            ("dob", SchemaNode::string()),
            ("address", SchemaNode::string().unrequired()),
            ("currentlyAdmittedTo", hospital.nullable()),
        ],
    ));

    let records = [
        json!({"name": "Rosanna", "id": 9, "dob": ".", "address": "..",
               "currentlyAdmittedTo": {"name": "St. Peter's", "id": 6, "location": "..."}}),
        json!({"name": "Susan", "id": 5, "dob": "...", "currentlyAdmittedTo": null}),
        json!({"name": "Joe", "id": 12, "dob": "........", "address": null,
               "currentlyAdmittedTo": null}),
        json!(["not", "a", "patient"]),
    ];

    let validator = Validator::new(ValidationConfig { exhaustive: true });
    println!("Patient schema depth: {}", patient.depth());
    for record in &records {
        let verdict = validator.validate(&DynamicValue::from(record), &patient);
        println!("{:<5} {}", verdict, record);
    }
}
