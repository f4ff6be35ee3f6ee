use serde_json::Value as JsonValue;

/// Check an incoming body against the fixed record shape.
///
/// Every check runs; failures accumulate rather than short-circuiting, so
/// the client sees the full list in one response. A missing field fails
/// its type check. No coercion, no defaulting: an empty result means the
/// body proceeds unchanged.
pub fn validate_record(body: &JsonValue) -> Vec<String> {
    let mut errors = Vec::new();

    if !body.get("ID").is_some_and(JsonValue::is_number) {
        errors.push("ID must be a number".to_string());
    }
    if !body.get("Name").is_some_and(JsonValue::is_string) {
        errors.push("Name must be a string".to_string());
    }
    if !body.get("Rating").is_some_and(JsonValue::is_number) {
        errors.push("Rating must be a number".to_string());
    }
    if !body.get("Description").is_some_and(JsonValue::is_string) {
        errors.push("Description must be a string".to_string());
    }
    if !body.get("Genre").is_some_and(JsonValue::is_string) {
        errors.push("Genre must be a string".to_string());
    }

    let cast_ok = body
        .get("Cast")
        .and_then(JsonValue::as_array)
        .is_some_and(|cast| cast.iter().all(JsonValue::is_string));
    if !cast_ok {
        errors.push("Cast must be an array of strings".to_string());
    }

    errors
}
