//! The strict JSON Schema sent with every tailoring request.
//!
//! Mirrors `models::resume::TailoredResume`: every object is closed
//! (`additionalProperties: false`) and lists all of its fields as required.

use serde_json::{json, Value};

/// Name under which the schema is registered with the Responses API.
pub const SCHEMA_NAME: &str = "tailored_resume";

fn string() -> Value {
    json!({ "type": "string" })
}

fn string_array() -> Value {
    json!({ "type": "array", "items": string() })
}

/// A closed object whose every property is required.
fn closed_object(properties: &[(&str, Value)]) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();

    json!({
        "type": "object",
        "additionalProperties": false,
        "required": required,
        "properties": properties,
    })
}

fn array_of(items: Value) -> Value {
    json!({ "type": "array", "items": items })
}

/// Builds the schema for a `TailoredResume`.
pub fn tailored_resume_schema() -> Value {
    closed_object(&[
        (
            "header",
            closed_object(&[("name", string()), ("contactLine", string())]),
        ),
        ("summary", string()),
        (
            "education",
            array_of(closed_object(&[
                ("institution", string()),
                ("dates", string()),
                ("degree", string()),
            ])),
        ),
        (
            "skills",
            array_of(closed_object(&[
                ("label", string()),
                ("items", string_array()),
            ])),
        ),
        (
            "experience",
            array_of(closed_object(&[
                ("company", string()),
                ("location", string()),
                ("dates", string()),
                ("title", string()),
                ("bullets", string_array()),
            ])),
        ),
        (
            "academicExperience",
            array_of(closed_object(&[
                ("title", string()),
                ("tools", string()),
                ("dates", string()),
                ("bullets", string_array()),
            ])),
        ),
    ])
}
