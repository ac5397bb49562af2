//! Reverse of construction: turns a prepared tree back into an untyped
//! document, dropping `null`s the way the per-version typed structs' own
//! `#[serde(skip_serializing_if = "Option::is_none")]` fields already do
//! when serialized directly — needed here only for trees assembled by hand
//! during migration, which may still carry explicit nulls.
use serde_json::{Map, Value};

pub fn dump(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map.iter() {
                if v.is_null() {
                    continue;
                }
                out.insert(k.clone(), dump(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(dump).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dump_strips_nulls() {
        let value = json!({"a": 1, "b": null, "c": {"d": null, "e": 2}});
        assert_eq!(dump(&value), json!({"a": 1, "c": {"e": 2}}));
    }

    #[test]
    fn test_dump_recurses_into_arrays() {
        let value = json!([{"a": null, "b": 1}]);
        assert_eq!(dump(&value), json!([{"b": 1}]));
    }
}
