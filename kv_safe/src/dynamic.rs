//! Native dynamic-access seam and the JSON object-map implementation

use crate::fault::Fault;
use serde_json::Value;

/// Native dynamic property access by key and dotted key path
///
/// This is the primitive the safe boundary wraps: resolve a key to a
/// property and return or accept its value, or signal failure by unwinding.
/// Implementations should raise a [`Fault`] so the boundary can report a
/// name and reason, but any panic is handled.
///
/// The key-path variants have default implementations that split the path on
/// `'.'` and walk it segment by segment. Hosts with a native path primitive
/// may override them; the safe boundary treats either the same way.
pub trait DynamicAccess {
    /// Resolve `key` to its property value
    ///
    /// # Panics
    ///
    /// Unwinds when the key does not resolve to a property or the property
    /// cannot be read.
    fn value_for_key(&self, key: &str) -> Value;

    /// Write `value` to the property named `key`
    ///
    /// `Value::Null` means "clear the property" where the implementation
    /// supports that semantic.
    ///
    /// # Panics
    ///
    /// Unwinds when the key does not resolve or the property rejects the
    /// value.
    fn set_value_for_key(&mut self, key: &str, value: Value);

    /// Resolve a dotted `key_path` segment by segment
    ///
    /// The default resolves the first segment through [`value_for_key`] and
    /// the remainder through the returned values. A fault raised at any
    /// segment propagates unchanged.
    ///
    /// [`value_for_key`]: DynamicAccess::value_for_key
    fn value_for_key_path(&self, key_path: &str) -> Value {
        match key_path.split_once('.') {
            None => self.value_for_key(key_path),
            Some((head, rest)) => self.value_for_key(head).value_for_key_path(rest),
        }
    }

    /// Write `value` at the dotted `key_path`
    ///
    /// The default reads the head segment, recurses into the returned value,
    /// and writes the modified value back through the head key. Nothing is
    /// written back when a deeper segment faults.
    fn set_value_for_key_path(&mut self, key_path: &str, value: Value) {
        match key_path.split_once('.') {
            None => self.set_value_for_key(key_path, value),
            Some((head, rest)) => {
                let mut child = self.value_for_key(head);
                child.set_value_for_key_path(rest, value);
                self.set_value_for_key(head, child);
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Object maps are key-value addressable; every other kind of receiver
/// raises a `NotAddressableFault`. Unlike a plain map lookup, a missing key
/// raises an `UndefinedKeyFault` instead of yielding null, so absent
/// properties are indistinguishable from unknown ones only to callers that
/// skip the error.
impl DynamicAccess for Value {
    fn value_for_key(&self, key: &str) -> Value {
        let Value::Object(map) = self else {
            Fault::not_addressable(value_kind(self)).raise()
        };
        match map.get(key) {
            Some(value) => value.clone(),
            None => Fault::undefined_key(key).raise(),
        }
    }

    fn set_value_for_key(&mut self, key: &str, value: Value) {
        let Value::Object(map) = self else {
            Fault::not_addressable(value_kind(self)).raise()
        };
        if value.is_null() {
            map.remove(key);
        } else {
            map.insert(key.to_string(), value);
        }
    }
}
