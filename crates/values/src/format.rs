//! crates/values/src/format.rs
//! Safe conversion of [`Value`]s into display payloads.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use thiserror::Error;

use super::number::Number;
use super::value::Value;

/// Written in place of a node that was already visited in the same serialisation.
pub const CIRCULAR_MARKER: &str = "[Circular]";

/// Display text for callables.
pub const FUNCTION_PLACEHOLDER: &str = "[Function]";

/// Display text for values with no usable representation.
pub const UNLOGGABLE_PLACEHOLDER: &str = "[Unloggable]";

/// A formatted value, ready to hand to a console.
#[derive(Clone, Debug, PartialEq)]
pub enum Loggable {
    /// Text, including serialised structures.
    Text(String),
    /// A number that passed through unchanged.
    Number(Number),
}

impl Loggable {
    /// The text payload, if this is [`Loggable::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for Loggable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => fmt::Display::fmt(number, f),
        }
    }
}

impl From<&str> for Loggable {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Loggable {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Number> for Loggable {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl PartialEq<str> for Loggable {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Loggable {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Reasons structural serialisation can fail.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The value is not made of JSON-representable parts.
    #[error("{kind} values are not structurally serializable")]
    NotStructural {
        /// [`Value::kind`] of the rejected value.
        kind: &'static str,
    },
    /// The serializer itself reported a failure.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Formats `value` for display. Never fails.
///
/// Strings and numbers pass through unchanged. Other structural values are
/// rendered as pretty JSON with two-space indentation, replacing any node
/// already visited with [`CIRCULAR_MARKER`]. Everything else goes through
/// [`fallback_text`].
///
/// # Examples
///
/// ```
/// use values::{Loggable, Value, format_value};
///
/// assert_eq!(format_value(&Value::from("peter")), "peter");
/// assert_eq!(
///     format_value(&Value::from(vec![1, 2])),
///     Loggable::Text("[\n  1,\n  2\n]".to_owned())
/// );
/// assert_eq!(format_value(&Value::function()), "[Function]");
/// ```
pub fn format_value(value: &Value) -> Loggable {
    match value {
        Value::String(text) => Loggable::Text(text.clone()),
        Value::Number(number) => Loggable::Number(*number),
        _ => Loggable::Text(to_pretty_json(value).unwrap_or_else(|_| fallback_text(value))),
    }
}

/// Serialises a structural value to pretty JSON, marking revisited nodes.
///
/// The set of visited nodes only grows during one call, so a node reached a
/// second time through a different path is also marked, not only true cycles.
///
/// Nested values with no JSON form follow JSON conventions: callables and
/// opaque values are dropped from objects and written as `null` in arrays,
/// errors become `{}`, and custom values keep their text.
pub fn to_pretty_json(value: &Value) -> Result<String, FormatError> {
    if !value.is_structural() {
        return Err(FormatError::NotStructural { kind: value.kind() });
    }

    let seen = RefCell::new(HashSet::new());
    let tracked = Tracked { value, seen: &seen };
    Ok(serde_json::to_string_pretty(&tracked)?)
}

/// Display text for values that cannot be serialised.
///
/// Errors render their stack, or their message when there is none;
/// callables render [`FUNCTION_PLACEHOLDER`]; custom values render their own
/// text; anything else renders [`UNLOGGABLE_PLACEHOLDER`].
pub fn fallback_text(value: &Value) -> String {
    match value {
        Value::Error(error) => error.stack().unwrap_or_else(|| error.message()).to_owned(),
        Value::Function => FUNCTION_PLACEHOLDER.to_owned(),
        Value::Custom(text) => text.clone(),
        _ => UNLOGGABLE_PLACEHOLDER.to_owned(),
    }
}

struct Tracked<'a> {
    value: &'a Value,
    seen: &'a RefCell<HashSet<usize>>,
}

impl<'a> Tracked<'a> {
    const fn nested(&self, value: &'a Value) -> Self {
        Self {
            value,
            seen: self.seen,
        }
    }
}

impl Serialize for Tracked<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Number(number) => number.serialize(serializer),
            Value::String(text) => serializer.serialize_str(text),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.nested(item))?;
                }
                seq.end()
            }
            Value::Object(fields) => {
                let kept = fields.iter().filter(|(_, field)| !is_omitted(field));
                let mut map = serializer.serialize_map(Some(kept.clone().count()))?;
                for (key, field) in kept {
                    map.serialize_entry(key, &self.nested(field))?;
                }
                map.end()
            }
            Value::Shared(node) => {
                let first_visit = self.seen.borrow_mut().insert(node.id());
                if !first_visit {
                    return serializer.serialize_str(CIRCULAR_MARKER);
                }
                node.with(|inner| {
                    Tracked {
                        value: inner,
                        seen: self.seen,
                    }
                    .serialize(serializer)
                })
            }
            // Errors expose no enumerable fields.
            Value::Error(_) => serializer.serialize_map(Some(0))?.end(),
            Value::Function | Value::Opaque => serializer.serialize_unit(),
            Value::Custom(text) => serializer.serialize_str(text),
        }
    }
}

/// Object fields holding these values are left out entirely.
const fn is_omitted(value: &Value) -> bool {
    matches!(value, Value::Function | Value::Opaque)
}
