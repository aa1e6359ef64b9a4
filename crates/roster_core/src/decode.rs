//! The decode capability shared by every record type.

use crate::json::JsonObject;
use serde_json::Value;

/// A record that can be built from a JSON object.
///
/// Decoding is all-or-nothing: either every mandatory field resolves and a
/// complete record comes back, or the answer is `None`.
pub trait FromJson: Sized {
    fn from_json(json: &JsonObject) -> Option<Self>;

    /// Decode an arbitrary JSON value; anything other than an object is absent.
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().and_then(Self::from_json)
    }
}

/// Decode each object independently and keep only the ones that succeed.
///
/// Order is preserved. `on_drop` receives the index of every rejected entry.
pub fn decode_all_with<T, F>(items: &[&JsonObject], mut on_drop: F) -> Vec<T>
where
    T: FromJson,
    F: FnMut(usize),
{
    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let decoded = T::from_json(item);
            if decoded.is_none() {
                on_drop(idx);
            }
            decoded
        })
        .collect()
}

pub fn decode_all<T: FromJson>(items: &[&JsonObject]) -> Vec<T> {
    decode_all_with(items, |_| {})
}
