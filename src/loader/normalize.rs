//! Response normalization: the single place where tolerated body shapes are
//! turned into typed records.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// How many `data` wrappers are peeled (`{message, data: {data: [...]}}`).
const MAX_WRAPPER_DEPTH: usize = 2;

/// List of raw records from a response body.
///
/// - `{ "data": ... }` → unwrap and retry (bounded depth)
/// - `[ ... ]` → the list itself
/// - anything else → empty
pub fn extract_records(body: Value) -> Vec<Value> {
    let mut current = body;
    for _ in 0..=MAX_WRAPPER_DEPTH {
        match current {
            Value::Array(items) => return items,
            Value::Object(mut map) => match map.remove("data") {
                Some(inner) => current = inner,
                None => return Vec::new(),
            },
            _ => return Vec::new(),
        }
    }
    Vec::new()
}

/// Typed records plus the number of items that failed to decode.
#[derive(Debug)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

pub fn decode_records<T: DeserializeOwned>(source: &str, items: Vec<Value>) -> Decoded<T> {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(r) => records.push(r),
            Err(e) => {
                skipped += 1;
                tracing::warn!(source, position, error = %e, "skipping undecodable record");
            }
        }
    }

    Decoded { records, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;
    use serde_json::json;

    #[test]
    fn accepts_wrapped_bare_and_nested_shapes() {
        assert_eq!(extract_records(json!({ "data": [1, 2] })).len(), 2);
        assert_eq!(extract_records(json!([1, 2, 3])).len(), 3);
        assert_eq!(
            extract_records(json!({ "message": "ok", "data": { "data": [1] } })).len(),
            1
        );
    }

    #[test]
    fn anything_else_is_empty() {
        assert!(extract_records(json!({ "items": [1] })).is_empty());
        assert!(extract_records(json!({ "data": null })).is_empty());
        assert!(extract_records(json!("oops")).is_empty());
        assert!(extract_records(Value::Null).is_empty());
        assert!(extract_records(json!({ "data": { "data": { "data": [1] } } })).is_empty());
    }

    #[test]
    fn undecodable_items_are_counted_not_fatal() {
        let items = extract_records(json!([
            { "employee_did": "E1" },
            { "ho_ten": "no did" },
            42,
            { "employee_did": "E2" }
        ]));
        let decoded: Decoded<Employee> = decode_records("employees", items);

        assert_eq!(decoded.records.len(), 2);
        assert_eq!(decoded.skipped, 2);
        assert_eq!(decoded.records[1].did, "E2");
    }
}
