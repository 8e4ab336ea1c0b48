use serde_json::{Map, Value};

/// Required fields that were absent or empty, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Checks every field in `required`, collecting all misses instead of stopping at the first one.
pub fn require_fields(required: &[&str], data: &Map<String, Value>) -> Result<(), ValidationError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| data.get(**field).map_or(true, is_empty))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
