//! JSON numeric normalization
//!
//! The graph payloads cross the process boundary as `serde_json::Value`
//! trees. [`plain`] is the single point where every numeric leaf is
//! rebuilt from its primitive representation, so no internal numeric
//! type reaches the wire. Strings, booleans, and nulls pass through
//! untouched.

use serde_json::{Number, Value};

/// Recursively rebuild a value so it contains only plain primitives.
pub fn plain(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, plain(v))).collect()),
        Value::Array(items) => Value::Array(items.into_iter().map(plain).collect()),
        Value::Number(n) => plain_number(n),
        other => other,
    }
}

fn plain_number(n: Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else if let Some(f) = n.as_f64() {
        // A non-finite float has no JSON representation
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    } else {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recurses_through_containers() {
        let value = json!({
            "nodes": [{"id": "P1", "citation_count": 3, "impact_score": 4.4}],
            "links": [],
        });

        let normalized = plain(value.clone());
        assert_eq!(normalized, value);
        assert!(normalized["nodes"][0]["citation_count"].is_i64());
        assert!(normalized["nodes"][0]["impact_score"].is_f64());
    }

    #[test]
    fn test_leaves_non_numeric_scalars_unchanged() {
        let value = json!({"name": "Paper_P1", "ok": true, "missing": null});
        assert_eq!(plain(value.clone()), value);
    }

    #[test]
    fn test_large_unsigned_survives() {
        let value = json!(u64::MAX);
        assert_eq!(plain(value), json!(u64::MAX));
    }
}
