//! crates/values/src/shared.rs
//! Reference-counted value nodes with identity.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::value::Value;

/// A value node that can be referenced from several places, including itself.
///
/// Cloning a `Shared` clones the handle, not the value: both handles refer to
/// the same node and compare equal under [`ptr_eq`](Self::ptr_eq). Formatting
/// tracks nodes by this identity, which is what lets self-referential graphs
/// render without recursing forever.
///
/// A cycle of `Shared` handles keeps its nodes alive; break the cycle with
/// [`replace`](Self::replace) when the graph is no longer needed.
///
/// # Examples
///
/// ```
/// use values::{Shared, Value, format_value};
///
/// let node = Shared::new(Value::object().with_field("name", "peter"));
/// node.insert("me", node.clone());
///
/// let text = format_value(&Value::from(node)).to_string();
/// assert!(text.contains("\"me\": \"[Circular]\""));
/// ```
#[derive(Clone)]
pub struct Shared(Arc<RwLock<Value>>);

impl Shared {
    /// Wraps `value` in a new node.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Address of the node, stable for its lifetime.
    #[must_use]
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }

    /// Reports whether both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Runs `f` with a shared borrow of the node's value.
    pub fn with<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` with an exclusive borrow of the node's value.
    pub fn update<R>(&self, f: impl FnOnce(&mut Value) -> R) -> R {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Replaces the node's value, returning the previous one.
    pub fn replace(&self, value: Value) -> Value {
        self.update(|current| std::mem::replace(current, value))
    }

    /// Inserts a field when the node holds an object. See [`Value::insert`].
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let (key, value) = (key.into(), value.into());
        self.update(|current| current.insert(key, value))
    }

    /// Appends an element when the node holds an array. See [`Value::push`].
    pub fn push(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.update(|current| current.push(value))
    }
}

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The node may contain itself, so only its identity is printed.
        f.debug_tuple("Shared")
            .field(&format_args!("{:#x}", self.id()))
            .finish()
    }
}
