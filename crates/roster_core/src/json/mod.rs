//! Total accessors over dynamic JSON.
//!
//! Every accessor answers `None` for a missing key or a value of the wrong
//! type; nothing here panics or returns an error.

pub mod access;
pub mod chain;

pub use access::{boolean, double, float, integer, number, object_array, string};
pub use chain::{bind, flatten};

/// A key-value mapping as it appears inside a JSON document.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Short name of a value's JSON type, used in log lines and errors.
pub fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
