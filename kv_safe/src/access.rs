//! Safe accessor boundary over native dynamic property access

use crate::dynamic::DynamicAccess;
use crate::error::{AccessError, AccessErrorCode, AccessResult};
use crate::fault::CapturedFault;
use serde_json::Value;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Fault-capturing wrappers around [`DynamicAccess`]
///
/// Blanket-implemented for every `DynamicAccess` target. Each method makes
/// exactly one call into the native accessor: a normal return passes through
/// untouched, an unwind is converted into an [`AccessError`] tagged with the
/// operation direction. No fault escapes the call and none is discarded.
///
/// The boundary holds no state and adds no synchronization; thread safety is
/// whatever the target itself provides.
pub trait SafeAccess: DynamicAccess {
    /// Read the property named `key`
    fn try_value_for_key(&self, key: &str) -> AccessResult<Value> {
        capture(AccessErrorCode::GetValueFault, key, || {
            self.value_for_key(key)
        })
    }

    /// Read the property at the dotted `key_path`
    ///
    /// A fault from any segment is captured identically; which segment
    /// failed is only visible through the fault's description.
    fn try_value_for_key_path(&self, key_path: &str) -> AccessResult<Value> {
        capture(AccessErrorCode::GetValueFault, key_path, || {
            self.value_for_key_path(key_path)
        })
    }

    /// Write `value` to the property named `key`
    ///
    /// `Value::Null` requests a clear where the native accessor supports it.
    /// On fault the target is left however the native accessor left it; no
    /// rollback is attempted.
    fn try_set_value_for_key(&mut self, key: &str, value: Value) -> AccessResult<()> {
        capture(AccessErrorCode::SetValueFault, key, || {
            self.set_value_for_key(key, value)
        })
    }

    /// Write `value` at the dotted `key_path`
    fn try_set_value_for_key_path(&mut self, key_path: &str, value: Value) -> AccessResult<()> {
        capture(AccessErrorCode::SetValueFault, key_path, || {
            self.set_value_for_key_path(key_path, value)
        })
    }
}

impl<T: DynamicAccess + ?Sized> SafeAccess for T {}

/// The single capture point shared by all four operations: run one native
/// call, translate any unwind into a direction-tagged error.
fn capture<R>(code: AccessErrorCode, key: &str, op: impl FnOnce() -> R) -> AccessResult<R> {
    match catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let fault = CapturedFault::from_payload(payload);
            tracing::debug!(key, code = ?code, %fault, "captured native accessor fault");
            Err(AccessError::new(code, key, fault))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::{Fault, GENERIC_FAULT, UNDEFINED_KEY_FAULT};
    use serde_json::json;

    /// Target whose accessors always unwind, with an unstructured payload
    struct Hostile;

    impl DynamicAccess for Hostile {
        fn value_for_key(&self, _key: &str) -> Value {
            panic!("read refused");
        }

        fn set_value_for_key(&mut self, _key: &str, _value: Value) {
            Fault::invalid_value("any", "write refused").raise();
        }
    }

    #[test]
    fn test_success_passes_through() {
        let target = json!({ "name": "Ada" });
        let value = target.try_value_for_key("name").unwrap();
        assert_eq!(value, json!("Ada"));
    }

    #[test]
    fn test_get_fault_is_direction_tagged() {
        let target = json!({});
        let err = target.try_value_for_key("ghost").unwrap_err();
        assert_eq!(err.code(), AccessErrorCode::GetValueFault);
        assert_eq!(err.key(), "ghost");
        assert_eq!(err.fault().name, UNDEFINED_KEY_FAULT);
    }

    #[test]
    fn test_set_fault_is_direction_tagged() {
        let mut target = Hostile;
        let err = target.try_set_value_for_key("name", json!("x")).unwrap_err();
        assert_eq!(err.code(), AccessErrorCode::SetValueFault);
    }

    #[test]
    fn test_unstructured_panic_is_captured() {
        let target = Hostile;
        let err = target.try_value_for_key("name").unwrap_err();
        assert_eq!(err.fault().name, GENERIC_FAULT);
        assert_eq!(err.fault().description, "read refused");
    }

    #[test]
    fn test_path_variants_share_direction_tagging() {
        let mut target = json!({ "address": null });

        let err = target.try_value_for_key_path("address.city").unwrap_err();
        assert_eq!(err.code(), AccessErrorCode::GetValueFault);
        assert_eq!(err.key(), "address.city");

        let err = target
            .try_set_value_for_key_path("address.city", json!("Turin"))
            .unwrap_err();
        assert_eq!(err.code(), AccessErrorCode::SetValueFault);
    }

    #[test]
    fn test_trait_object_target() {
        let target: &dyn DynamicAccess = &json!({ "name": "Ada" });
        assert_eq!(target.try_value_for_key("name").unwrap(), json!("Ada"));
    }
}
