use super::chain::bind;
use super::JsonObject;
use serde_json::{Number, Value};

/// `input[key]` when it is a JSON number.
pub fn number<'a>(input: &'a JsonObject, key: &str) -> Option<&'a Number> {
    bind(input.get(key), |value| match value {
        Value::Number(n) => Some(n),
        _ => None,
    })
}

/// Integer view of `input[key]`.
///
/// Fractional numbers truncate toward zero; anything outside the `i64`
/// range is treated as absent.
pub fn integer(input: &JsonObject, key: &str) -> Option<i64> {
    bind(number(input, key), number_to_i64)
}

pub fn float(input: &JsonObject, key: &str) -> Option<f32> {
    double(input, key).map(|v| v as f32)
}

pub fn double(input: &JsonObject, key: &str) -> Option<f64> {
    bind(number(input, key), Number::as_f64)
}

/// `input[key]` when it is a JSON string.
pub fn string<'a>(input: &'a JsonObject, key: &str) -> Option<&'a str> {
    bind(input.get(key), Value::as_str)
}

/// Truthiness of `input[key]`: zero is `false`, any other number is `true`.
/// JSON `true`/`false` literals are accepted as well.
pub fn boolean(input: &JsonObject, key: &str) -> Option<bool> {
    match input.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(number_is_truthy(n)),
        _ => None,
    }
}

/// `input[key]` as a sequence of objects.
///
/// The array is taken as a whole: if any element is not an object the
/// entire sequence is absent.
pub fn object_array<'a>(input: &'a JsonObject, key: &str) -> Option<Vec<&'a JsonObject>> {
    bind(input.get(key), Value::as_array)?
        .iter()
        .map(Value::as_object)
        .collect()
}

fn number_to_i64(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        // Larger than i64::MAX.
        return None;
    }

    let f = n.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

fn number_is_truthy(n: &Number) -> bool {
    if let Some(i) = n.as_i64() {
        i != 0
    } else if let Some(u) = n.as_u64() {
        u != 0
    } else {
        n.as_f64().is_some_and(|f| f != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_number_and_integer() {
        let input = object(json!({
            "whole": 7,
            "negative": -3,
            "fraction": 7.9,
            "negative_fraction": -2.5,
            "text": "7",
            "huge": 18446744073709551615u64,
        }));

        assert!(number(&input, "whole").is_some());
        assert!(number(&input, "text").is_none());
        assert!(number(&input, "missing").is_none());

        assert_eq!(integer(&input, "whole"), Some(7));
        assert_eq!(integer(&input, "negative"), Some(-3));
        assert_eq!(integer(&input, "fraction"), Some(7));
        assert_eq!(integer(&input, "negative_fraction"), Some(-2));
        assert_eq!(integer(&input, "text"), None);
        assert_eq!(integer(&input, "huge"), None);
    }

    #[test]
    fn test_float_and_double() {
        let input = object(json!({ "rate": 0.25, "count": 4, "name": "x" }));

        assert_eq!(double(&input, "rate"), Some(0.25));
        assert_eq!(float(&input, "rate"), Some(0.25f32));
        assert_eq!(double(&input, "count"), Some(4.0));
        assert_eq!(double(&input, "name"), None);
        assert_eq!(float(&input, "missing"), None);
    }

    #[test]
    fn test_string() {
        let input = object(json!({ "name": "Wolves", "id": 1, "nothing": null }));

        assert_eq!(string(&input, "name"), Some("Wolves"));
        assert_eq!(string(&input, "id"), None);
        assert_eq!(string(&input, "nothing"), None);
        assert_eq!(string(&input, "missing"), None);
    }

    #[test]
    fn test_boolean_truthiness() {
        let input = object(json!({
            "zero": 0,
            "one": 1,
            "minus": -4,
            "half": 0.5,
            "zero_float": 0.0,
            "yes": true,
            "no": false,
            "text": "true",
        }));

        assert_eq!(boolean(&input, "zero"), Some(false));
        assert_eq!(boolean(&input, "one"), Some(true));
        assert_eq!(boolean(&input, "minus"), Some(true));
        assert_eq!(boolean(&input, "half"), Some(true));
        assert_eq!(boolean(&input, "zero_float"), Some(false));
        assert_eq!(boolean(&input, "yes"), Some(true));
        assert_eq!(boolean(&input, "no"), Some(false));
        assert_eq!(boolean(&input, "text"), None);
        assert_eq!(boolean(&input, "missing"), None);
    }

    #[test]
    fn test_object_array() {
        let input = object(json!({
            "players": [{ "name": "A" }, { "name": "B" }],
            "mixed": [{ "name": "A" }, 3],
            "empty": [],
            "scalar": { "name": "A" },
        }));

        let players = object_array(&input, "players").unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(string(players[1], "name"), Some("B"));

        assert!(object_array(&input, "mixed").is_none());
        assert_eq!(object_array(&input, "empty").map(|v| v.len()), Some(0));
        assert!(object_array(&input, "scalar").is_none());
        assert!(object_array(&input, "missing").is_none());
    }
}
