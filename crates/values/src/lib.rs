#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/values/src/lib.rs
//!
//! # Overview
//!
//! `values` models the arbitrary payloads a caller hands to the logger and
//! turns each one into something a console can display without ever
//! failing.
//!
//! # Design
//!
//! [`Value`] is a tagged variant covering primitives, JSON-like structures,
//! identity-carrying [`Shared`] nodes, errors, callables, and values that only
//! offer a custom textual form. [`format_value`] dispatches on the variant in
//! a fixed order: strings and numbers pass through, structural values are
//! serialised to pretty JSON through `serde_json`, and the rest fall back to
//! a display string.
//!
//! # Invariants
//!
//! - [`format_value`] never panics and always returns a [`Loggable`].
//! - Within one serialisation a [`Shared`] node is expanded at most once;
//!   later references render as [`CIRCULAR_MARKER`].
//! - Pretty output uses two-space indentation.
//!
//! # Examples
//!
//! ```
//! use values::{Shared, Value, format_value};
//!
//! let list = Shared::new(Value::array());
//! list.push("first");
//! list.push(&list);
//!
//! let text = format_value(&Value::from(&list)).to_string();
//! assert_eq!(text, "[\n  \"first\",\n  \"[Circular]\"\n]");
//! # list.replace(Value::Null);
//! ```

mod format;
mod number;
mod shared;
mod value;

pub use format::{
    CIRCULAR_MARKER, FUNCTION_PLACEHOLDER, FormatError, Loggable, UNLOGGABLE_PLACEHOLDER,
    fallback_text, format_value, to_pretty_json,
};
pub use number::Number;
pub use shared::Shared;
pub use value::{ErrorValue, Value};
