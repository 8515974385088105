//! Attribute normalization and merging.

use super::{
    attribute::{AttributeValue, Attributes, StrictValue},
    sanitize::{add_slashes, json_attribute_encode, sanitize_token},
};
use crate::value::is_truthy;
use itertools::Itertools;
use log::debug;
use serde_json::Value;

/// Converts a loosely-typed attribute value into a sanitized one.
///
/// The rule is selected by the case-insensitive attribute name. `None` means
/// that the attribute is omitted, which is the case for any omitted or `null`
/// value regardless of the name.
pub fn normalize_attribute_value(name: &str, value: AttributeValue) -> Option<StrictValue> {
    if matches!(
        value,
        AttributeValue::Omit | AttributeValue::Structured(Value::Null)
    ) {
        return None;
    }

    Some(match name.to_ascii_lowercase().as_str() {
        "class" => StrictValue::Text(classes(&value)),
        "id" => StrictValue::Text(sanitize_token(&value.scalar_text().unwrap_or_default())),
        "style" => match value {
            AttributeValue::Structured(Value::Array(_) | Value::Object(_)) => {
                debug!("structured style attributes are not supported yet");
                StrictValue::Text(String::new())
            }
            value => StrictValue::Text(escape_text(&value.scalar_text().unwrap_or_default())),
        },
        _ => match value {
            AttributeValue::Structured(value @ (Value::Array(_) | Value::Object(_))) => {
                StrictValue::Text(json_attribute_encode(&value))
            }
            AttributeValue::Structured(Value::Null) | AttributeValue::Omit => return None,
            AttributeValue::Structured(Value::Bool(flag)) | AttributeValue::Flag(flag) => {
                StrictValue::Flag(flag)
            }
            AttributeValue::Integer(integer) => StrictValue::Text(integer.to_string()),
            AttributeValue::Structured(Value::Number(number)) => {
                StrictValue::Text(number.to_string())
            }
            AttributeValue::Structured(Value::String(text)) | AttributeValue::Text(text) => {
                StrictValue::Text(escape_text(&text))
            }
        },
    })
}

/// Flattens a class list into a sanitized, space-separated class string.
///
/// Strings are sanitized, lists are flattened recursively skipping falsy
/// entries, and maps contribute keys whose values are truthy.
pub fn classes(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(text) => sanitize_token(text),
        AttributeValue::Structured(value) => structured_classes(value),
        AttributeValue::Flag(_) | AttributeValue::Integer(_) | AttributeValue::Omit => {
            String::new()
        }
    }
}

fn structured_classes(value: &Value) -> String {
    match value {
        Value::String(text) => sanitize_token(text),
        Value::Array(values) => join_classes(
            values
                .iter()
                .filter(|value| is_truthy(value))
                .map(structured_classes),
        ),
        Value::Object(map) => join_classes(
            map.iter()
                .filter(|(name, value)| !name.is_empty() && is_truthy(value))
                .map(|(name, _)| sanitize_token(name)),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => String::new(),
    }
}

fn join_classes(classes: impl Iterator<Item = String>) -> String {
    classes
        .filter(|class| !class.is_empty() && class != "0")
        .join(" ")
        .trim()
        .to_owned()
}

/// Merges an attribute given separately from an attribute map into it.
///
/// Classes are appended. Style merging is not supported yet. Any other
/// attribute is set only if the incoming value is truthy and the existing
/// one is missing or falsy.
pub fn merge_attribute(name: &str, value: AttributeValue, attributes: &mut Attributes) {
    match name {
        "class" => {
            if !value.is_truthy() {
                return;
            }

            let Some(existing) = attributes
                .get_mut(name)
                .filter(|existing| existing.is_truthy())
            else {
                attributes.insert(name, value);
                return;
            };

            match existing {
                AttributeValue::Structured(Value::Array(values)) => values.push(value.into_json()),
                AttributeValue::Structured(Value::Object(map)) => {
                    let class = classes(&value);

                    if !class.is_empty() {
                        map.insert(class, Value::Bool(true));
                    }
                }
                existing => {
                    *existing = AttributeValue::Text(
                        format!(
                            "{} {}",
                            existing.scalar_text().unwrap_or_default(),
                            classes(&value)
                        )
                        .trim()
                        .to_owned(),
                    );
                }
            }
        }
        "style" => debug!("merging style attributes is not supported yet"),
        _ => {
            if value.is_truthy() && !attributes.get(name).is_some_and(AttributeValue::is_truthy) {
                attributes.insert(name, value);
            }
        }
    }
}

// Quotes are escaped with backslashes and then as entities so that they never
// terminate a double-quoted attribute value.
fn escape_text(text: &str) -> String {
    add_slashes(text).replace('"', "&quot;")
}
