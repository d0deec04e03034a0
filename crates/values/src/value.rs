//! crates/values/src/value.rs
//! The dynamic value model accepted by every log entry point.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

use super::number::Number;
use super::shared::Shared;

/// Any value handed to the logger.
///
/// The variants mirror the capability checks formatting performs, in order:
/// primitives pass through, structural values serialise to JSON, and the
/// remaining kinds fall back to a display string.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Number, displayed as-is.
    Number(Number),
    /// String, displayed as-is.
    String(String),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Key/value pairs in insertion order.
    Object(Vec<(String, Value)>),
    /// Node with identity; the only way to express shared or cyclic structure.
    Shared(Shared),
    /// Error with a message and optional stack or cause chain.
    Error(ErrorValue),
    /// Callable; displayed as a placeholder.
    Function,
    /// Value that only offers a custom textual representation.
    Custom(String),
    /// Value that cannot be displayed at all.
    Opaque,
}

impl Value {
    /// An empty object.
    #[must_use]
    pub const fn object() -> Self {
        Self::Object(Vec::new())
    }

    /// An empty array.
    #[must_use]
    pub const fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Self>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `value` under `key` when `self` is an object.
    ///
    /// An existing field with the same key is overwritten in place, keeping
    /// its position. Returns `false` and drops `value` for any other variant.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Self>) -> bool {
        let Self::Object(fields) = self else {
            return false;
        };
        let (key, value) = (key.into(), value.into());
        match fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => fields.push((key, value)),
        }
        true
    }

    /// Appends `value` when `self` is an array. Returns `false` otherwise.
    pub fn push(&mut self, value: impl Into<Self>) -> bool {
        let Self::Array(items) = self else {
            return false;
        };
        items.push(value.into());
        true
    }

    /// Converts any serialisable value.
    ///
    /// Values serde cannot represent become [`Value::Opaque`].
    pub fn serialized<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map_or(Self::Opaque, Self::from)
    }

    /// Wraps an error, keeping its source chain as the stack text.
    pub fn error<E>(error: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        Self::Error(ErrorValue::from_error(error))
    }

    /// Wraps a value that only implements [`fmt::Display`].
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Custom(value.to_string())
    }

    /// Placeholder for a callable.
    #[must_use]
    pub const fn function() -> Self {
        Self::Function
    }

    /// Reports whether the value serialises to JSON structurally.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Null
                | Self::Bool(_)
                | Self::Number(_)
                | Self::String(_)
                | Self::Array(_)
                | Self::Object(_)
                | Self::Shared(_)
        )
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Shared(_) => "shared",
            Self::Error(_) => "error",
            Self::Function => "function",
            Self::Custom(_) => "custom",
            Self::Opaque => "opaque",
        }
    }
}

/// An error captured for display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorValue {
    message: String,
    stack: Option<String>,
}

impl ErrorValue {
    /// Error with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    /// Attaches stack text, such as a rendered [`std::backtrace::Backtrace`].
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Captures `error` and, when it has sources, a `caused by:` chain as the stack.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        let message = error.to_string();
        let mut stack = message.clone();
        let mut source = error.source();
        let mut chained = false;
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
            chained = true;
        }

        Self {
            message,
            stack: chained.then_some(stack),
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack text, if any.
    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }
}

impl From<&Self> for Value {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl From<ErrorValue> for Value {
    fn from(error: ErrorValue) -> Self {
        Self::Error(error)
    }
}

impl From<Shared> for Value {
    fn from(node: Shared) -> Self {
        Self::Shared(node)
    }
}

impl From<&Shared> for Value {
    fn from(node: &Shared) -> Self {
        Self::Shared(node.clone())
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::String(text.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(text: Cow<'_, str>) -> Self {
        Self::String(text.into_owned())
    }
}

impl From<char> for Value {
    fn from(ch: char) -> Self {
        Self::String(ch.to_string())
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

macro_rules! impl_from_numeric {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Self>,
{
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for Value
where
    T: Clone + Into<Self>,
{
    fn from(items: &[T]) -> Self {
        Self::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(Number::from(&number)),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("request failed")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection reset")
        }
    }

    impl StdError for Inner {}

    #[test]
    fn primitive_conversions() {
        assert!(matches!(Value::from("peter"), Value::String(ref s) if s == "peter"));
        assert!(matches!(Value::from(3), Value::Number(Number::Int(3))));
        assert!(matches!(Value::from(2.5), Value::Number(Number::Float(_))));
        assert!(matches!(Value::from(true), Value::Bool(true)));
        assert!(matches!(Value::from(None::<i32>), Value::Null));
        assert!(matches!(Value::from(()), Value::Null));
    }

    #[test]
    fn insert_overwrites_in_place() {
        let value = Value::object()
            .with_field("a", 1)
            .with_field("b", 2)
            .with_field("a", 3);

        let Value::Object(fields) = value else {
            panic!("expected object");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "a");
        assert!(matches!(fields[0].1, Value::Number(Number::Int(3))));
    }

    #[test]
    fn insert_and_push_reject_wrong_variants() {
        let mut value = Value::array();
        assert!(!value.insert("k", 1));
        assert!(value.push(1));

        let mut value = Value::object();
        assert!(!value.push(1));
    }

    #[test]
    fn serialized_converts_through_json() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let Value::Object(fields) = Value::serialized(&Point { x: 1, y: -2 }) else {
            panic!("expected object");
        };
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn serialized_marks_unrepresentable_values_opaque() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not JSON");
        assert!(matches!(Value::serialized(&map), Value::Opaque));
    }

    #[test]
    fn error_without_source_has_no_stack() {
        let value = ErrorValue::from_error(&Inner);
        assert_eq!(value.message(), "connection reset");
        assert_eq!(value.stack(), None);
    }

    #[test]
    fn error_source_chain_becomes_stack() {
        let value = ErrorValue::from_error(&Outer(Inner));
        assert_eq!(value.message(), "request failed");
        assert_eq!(
            value.stack(),
            Some("request failed\n    caused by: connection reset")
        );
    }

    #[test]
    fn is_structural_splits_the_variants() {
        assert!(Value::Null.is_structural());
        assert!(Value::object().is_structural());
        assert!(!Value::function().is_structural());
        assert!(!Value::display(42).is_structural());
        assert!(!Value::Opaque.is_structural());
        assert_eq!(Value::error(&Inner).kind(), "error");
    }
}
