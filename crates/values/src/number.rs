//! crates/values/src/number.rs
//! Numeric payloads that pass through formatting untouched.

use std::fmt;

use serde::{Serialize, Serializer};

/// A number handed to the logger.
///
/// Integers keep their exact value; floats keep their IEEE representation so
/// `NaN` and infinities still display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too large or naturally unsigned.
    UInt(u64),
    /// Floating-point value.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::UInt(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Self::Int(value) => serializer.serialize_i64(value),
            Self::UInt(value) => serializer.serialize_u64(value),
            Self::Float(value) => serializer.serialize_f64(value),
        }
    }
}

macro_rules! impl_from_number {
    ($variant:ident as $wide:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Self::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64);
impl_from_number!(UInt as u64: u8, u16, u32, u64);
impl_from_number!(Float as f64: f32, f64);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(int) = value.as_i64() {
            Self::Int(int)
        } else if let Some(uint) = value.as_u64() {
            Self::UInt(uint)
        } else {
            Self::Float(value.as_f64().unwrap_or(f64::NAN))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_native_formatting() {
        assert_eq!(Number::Int(-42).to_string(), "-42");
        assert_eq!(Number::UInt(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
        assert_eq!(Number::Float(3.0).to_string(), "3");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn conversions_pick_the_widest_variant() {
        assert_eq!(Number::from(7u8), Number::UInt(7));
        assert_eq!(Number::from(-7i16), Number::Int(-7));
        assert_eq!(Number::from(0.25f32), Number::Float(0.25));
        assert_eq!(Number::from(3usize), Number::UInt(3));
    }

    #[test]
    fn json_numbers_keep_integer_precision() {
        let big = serde_json::Number::from(u64::MAX);
        assert_eq!(Number::from(&big), Number::UInt(u64::MAX));

        let float = serde_json::Number::from_f64(2.5).expect("finite");
        assert_eq!(Number::from(&float), Number::Float(2.5));
    }

    #[test]
    fn serializes_as_json_number() {
        assert_eq!(serde_json::to_string(&Number::Int(5)).expect("json"), "5");
        assert_eq!(serde_json::to_string(&Number::Float(f64::INFINITY)).expect("json"), "null");
    }
}
