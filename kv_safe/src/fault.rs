//! Fault payloads raised by native accessors and their captured form

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::panic::panic_any;

/// Fault name raised when a key does not resolve to any property
pub const UNDEFINED_KEY_FAULT: &str = "UndefinedKeyFault";

/// Fault name raised when a property rejects the value being written
pub const INVALID_VALUE_FAULT: &str = "InvalidValueFault";

/// Fault name raised when the receiver cannot be addressed by key at all
pub const NOT_ADDRESSABLE_FAULT: &str = "NotAddressableFault";

/// Fault name assigned to unstructured panic payloads
pub const GENERIC_FAULT: &str = "GenericFault";

/// Structured panic payload for native accessor failures
///
/// Native [`DynamicAccess`](crate::DynamicAccess) implementations signal
/// failure by unwinding. Raising a `Fault` keeps the name and reason intact
/// through the unwind so the access boundary can report both. Plain `panic!`
/// payloads are still captured, under [`GENERIC_FAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// Short fault classification, e.g. [`UNDEFINED_KEY_FAULT`]
    pub name: String,
    /// Human-readable description of what went wrong
    pub reason: String,
}

impl Fault {
    /// Create a fault with an explicit name and reason
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Fault for a key with no matching property on the receiver
    pub fn undefined_key(key: &str) -> Self {
        Self::new(
            UNDEFINED_KEY_FAULT,
            format!("no property for key '{key}'"),
        )
    }

    /// Fault for a value the property refused to accept
    pub fn invalid_value(key: &str, detail: impl fmt::Display) -> Self {
        Self::new(
            INVALID_VALUE_FAULT,
            format!("value rejected for key '{key}': {detail}"),
        )
    }

    /// Fault for a receiver that is not key-value addressable
    pub fn not_addressable(receiver_kind: &str) -> Self {
        Self::new(
            NOT_ADDRESSABLE_FAULT,
            format!("receiver of kind '{receiver_kind}' is not key-value addressable"),
        )
    }

    /// Raise this fault by unwinding with `self` as the panic payload
    pub fn raise(self) -> ! {
        panic_any(self)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// Diagnostic data extracted from a caught unwind
///
/// Built once per captured fault and handed to the caller inside an
/// [`AccessError`](crate::AccessError). Never re-raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedFault {
    /// Fault classification, [`GENERIC_FAULT`] for unstructured payloads
    pub name: String,
    /// Textual description carried by the payload
    pub description: String,
}

impl CapturedFault {
    /// Extract name and description from a panic payload
    ///
    /// [`Fault`] payloads map field for field. `String` and `&str` payloads
    /// keep their text as the description under [`GENERIC_FAULT`]. Anything
    /// else gets a fixed placeholder description.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Fault>() {
            Ok(fault) => Self::from(*fault),
            Err(payload) => match payload.downcast::<String>() {
                Ok(text) => Self::generic(*text),
                Err(payload) => match payload.downcast::<&'static str>() {
                    Ok(text) => Self::generic((*text).to_string()),
                    Err(_) => Self::generic("unrecognized panic payload".to_string()),
                },
            },
        }
    }

    fn generic(description: String) -> Self {
        Self {
            name: GENERIC_FAULT.to_string(),
            description,
        }
    }
}

impl From<Fault> for CapturedFault {
    fn from(fault: Fault) -> Self {
        Self {
            name: fault.name,
            description: fault.reason,
        }
    }
}

impl fmt::Display for CapturedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
