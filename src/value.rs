//! Loose coercion helpers over JSON values.

use serde_json::Value;

/// Returns whether a value is truthy.
///
/// Empty strings, `"0"`, zero numbers, `false`, `null`, and empty arrays or
/// objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(string) => !string.is_empty() && string != "0",
        Value::Array(values) => !values.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns whether a value is a string, a number, or a boolean.
pub const fn is_scalar_like(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Returns whether a value is a scalar or `null`.
pub const fn is_singular(value: &Value) -> bool {
    is_scalar_like(value) || matches!(value, Value::Null)
}

/// Returns a singular value as is, or an empty string otherwise.
pub fn force_singular(value: Value) -> Value {
    if is_singular(&value) {
        value
    } else {
        Value::String(Default::default())
    }
}

/// Returns a scalar value as is, or a default value otherwise.
pub fn force_scalar(value: Value, default: Value) -> Value {
    if is_scalar_like(&value) {
        value
    } else {
        default
    }
}

/// Returns elements of an array or values of an object.
///
/// Any other value becomes an empty list.
pub fn force_array(value: Value) -> Vec<Value> {
    make_array(value, false)
}

/// Turns a value into a list without being too strict.
///
/// Scalars are wrapped into a single element list if `even_scalar` is set.
pub fn make_array(value: Value, even_scalar: bool) -> Vec<Value> {
    match value {
        Value::Array(values) => values,
        Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
        value if even_scalar && is_scalar_like(&value) => vec![value],
        _ => vec![],
    }
}
