//! Hospital records shared by the integration suites: schemas built with the
//! construction helpers, plus valid and invalid sample values for each.

#![allow(dead_code)]

use value_schema_core::{
    DynamicValue, PrimitiveKind, SchemaNode, extend_fields, schema_array, schema_object,
    schema_value,
};

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

pub fn record<const N: usize>(entries: [(&str, DynamicValue); N]) -> DynamicValue {
    DynamicValue::mapping(entries)
}

pub fn text(value: &str) -> DynamicValue {
    DynamicValue::from(value)
}

pub fn num(value: i32) -> DynamicValue {
    DynamicValue::from(value)
}

pub fn list(items: Vec<DynamicValue>) -> DynamicValue {
    DynamicValue::Sequence(items)
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

pub fn named_id_schema() -> SchemaNode {
    schema_object(
        [
            ("name", schema_value(PrimitiveKind::String, None, None)),
            ("id", schema_value(PrimitiveKind::Number, None, None)),
        ],
        None,
        None,
    )
}

pub fn specialty_schema() -> SchemaNode {
    schema_value(PrimitiveKind::String, Some(true), Some(true))
}

pub fn doctor_schema() -> SchemaNode {
    schema_object(
        extend_fields(&named_id_schema(), [("specialty", specialty_schema())]),
        None,
        None,
    )
}

pub fn hospital_schema() -> SchemaNode {
    schema_object(
        extend_fields(
            &named_id_schema(),
            [
                ("location", schema_value(PrimitiveKind::String, None, None)),
                ("headDoctor", doctor_schema()),
            ],
        ),
        None,
        None,
    )
}

pub fn patient_schema() -> SchemaNode {
    schema_object(
        extend_fields(
            &named_id_schema(),
            [
                ("dob", schema_value(PrimitiveKind::String, None, None)),
                ("address", schema_value(PrimitiveKind::String, Some(true), None)),
                (
                    "currentlyAdmittedTo",
                    schema_object(
                        hospital_schema().fields().cloned().unwrap_or_default(),
                        None,
                        Some(true),
                    ),
                ),
            ],
        ),
        None,
        None,
    )
}

pub fn visitation_schema() -> SchemaNode {
    schema_object(
        [
            ("patient", patient_schema()),
            ("location", hospital_schema()),
            ("date", schema_value(PrimitiveKind::String, None, None)),
        ],
        None,
        None,
    )
}

pub fn visitation_list_schema() -> SchemaNode {
    schema_array(visitation_schema(), None, None)
}

// ---------------------------------------------------------------------------
// Doctors
// ---------------------------------------------------------------------------

pub fn valid_doctors() -> Vec<DynamicValue> {
    vec![
        record([
            ("name", text("John")),
            ("id", num(0)),
            ("specialty", text("Woodwork")),
        ]),
        record([
            ("name", text("Hans")),
            ("id", num(1)),
            ("specialty", DynamicValue::Absent),
        ]),
        record([
            ("name", text("Jennifer")),
            ("id", num(2)),
            ("specialty", DynamicValue::Null),
        ]),
        record([
            ("name", text("Sam")),
            ("id", num(3)),
            ("specialty", text("Textiles")),
        ]),
    ]
}

pub fn invalid_doctors() -> Vec<DynamicValue> {
    vec![
        record([
            ("name", DynamicValue::Absent),
            ("id", num(4)),
            ("specialty", DynamicValue::Absent),
        ]),
        record([
            ("name", text("Rose")),
            ("id", DynamicValue::Null),
            ("speciality", text("Metalwork")),
        ]),
    ]
}

// ---------------------------------------------------------------------------
// Hospitals
// ---------------------------------------------------------------------------

pub fn valid_hospitals() -> Vec<DynamicValue> {
    vec![record([
        ("name", text("St. Peter's")),
        ("id", num(6)),
        ("location", text("...")),
        ("headDoctor", valid_doctors()[0].clone()),
    ])]
}

pub fn invalid_hospitals() -> Vec<DynamicValue> {
    vec![
        record([
            ("name", text("St. John's")),
            ("id", num(7)),
            ("location", DynamicValue::Null),
        ]),
        record([
            ("name", text("St. Joseph's")),
            ("id", num(8)),
            ("headDoctor", invalid_doctors()[0].clone()),
        ]),
    ]
}

// ---------------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------------

pub fn valid_patients() -> Vec<DynamicValue> {
    vec![
        record([
            ("name", text("Rosanna")),
            ("id", num(9)),
            ("dob", text(".")),
            ("address", text("..")),
            ("currentlyAdmittedTo", valid_hospitals()[0].clone()),
        ]),
        record([
            ("name", text("Susan")),
            ("id", num(5)),
            ("dob", text("...")),
            ("address", DynamicValue::Absent),
            ("currentlyAdmittedTo", DynamicValue::Null),
        ]),
    ]
}

pub fn invalid_patients() -> Vec<DynamicValue> {
    vec![
        text("patient string"),
        num(616161),
        DynamicValue::Absent,
        DynamicValue::Null,
        record([
            ("id", num(10)),
            ("dob", text(".....")),
            ("address", text("....")),
            ("currentlyAdmittedTo", valid_hospitals()[0].clone()),
        ]),
        record([
            ("name", text("Orwell")),
            ("id", num(11)),
            ("dob", text("......")),
            ("address", text(".......")),
            ("currentlyAdmittedTo", invalid_hospitals()[1].clone()),
        ]),
        record([
            ("name", text("Joe")),
            ("id", num(12)),
            ("dob", text("........")),
            ("address", DynamicValue::Null),
            ("currentlyAdmittedTo", DynamicValue::Null),
        ]),
    ]
}

// ---------------------------------------------------------------------------
// Visitation lists
// ---------------------------------------------------------------------------

fn visitations_for_every_pair() -> Vec<DynamicValue> {
    let hospitals = valid_hospitals();
    valid_patients()
        .into_iter()
        .enumerate()
        .flat_map(|(i, patient)| {
            hospitals.iter().enumerate().map(move |(j, hospital)| {
                record([
                    ("patient", patient.clone()),
                    ("location", hospital.clone()),
                    ("date", text(&format!("{i}-{j}"))),
                ])
            })
        })
        .collect()
}

pub fn valid_visitation_lists() -> Vec<DynamicValue> {
    vec![list(Vec::new()), list(visitations_for_every_pair())]
}

pub fn invalid_visitation_lists() -> Vec<DynamicValue> {
    let mut bad_patient = visitations_for_every_pair();
    bad_patient[1] = record([
        ("patient", invalid_patients()[0].clone()),
        ("location", valid_hospitals()[0].clone()),
        ("date", text("b0")),
    ]);

    let mut bad_location = visitations_for_every_pair();
    bad_location[1] = record([
        ("patient", valid_patients()[0].clone()),
        ("location", invalid_hospitals()[0].clone()),
        ("date", text("b1")),
    ]);

    vec![list(bad_patient), list(bad_location)]
}

/// One schema with the values it must accept and reject.
pub struct Case {
    pub name: &'static str,
    pub schema: SchemaNode,
    pub valid: Vec<DynamicValue>,
    pub invalid: Vec<DynamicValue>,
}

pub fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "Doctors",
            schema: doctor_schema(),
            valid: valid_doctors(),
            invalid: invalid_doctors(),
        },
        Case {
            name: "Hospitals",
            schema: hospital_schema(),
            valid: valid_hospitals(),
            invalid: invalid_hospitals(),
        },
        Case {
            name: "Patients",
            schema: patient_schema(),
            valid: valid_patients(),
            invalid: invalid_patients(),
        },
        Case {
            name: "Visitations Arrays",
            schema: visitation_list_schema(),
            valid: valid_visitation_lists(),
            invalid: invalid_visitation_lists(),
        },
    ]
}
