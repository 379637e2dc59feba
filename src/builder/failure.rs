//! Failure message extraction.

use serde_json::{Map, Value};

use crate::config::FailureAddress;
use crate::resolve::{resolve, JsonKind, ShapeError};

/// Separator between messages collected from a failure list.
pub const MESSAGE_SEPARATOR: &str = "; ";

/// Failure message of a case entry, `None` when the case passed.
///
/// Empty messages count as passed. A scalar failure field holding something
/// other than a string or null is a shape error; a list address whose outer
/// key is not an array yields no failure.
pub fn failure_message(
    entry: &Map<String, Value>,
    address: &FailureAddress,
) -> Result<Option<String>, ShapeError> {
    let message = match address {
        FailureAddress::Field(key) => match resolve(entry, key) {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message.clone()),
            Some(other) => {
                return Err(ShapeError::new(
                    key.as_str(),
                    JsonKind::String,
                    JsonKind::of(Some(other)),
                ))
            }
        },
        // A missing or non-array outer value means passed
        FailureAddress::List { outer, inner } => match resolve(entry, outer) {
            Some(Value::Array(items)) => Some(collect_messages(items, inner)),
            _ => None,
        },
    };

    // "" means passed
    Ok(message.filter(|m| !m.is_empty()))
}

fn collect_messages(items: &[Value], inner: &str) -> String {
    // Non-objects and non-string inner values are ignored
    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| item.get(inner).and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(MESSAGE_SEPARATOR)
}
