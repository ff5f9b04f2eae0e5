//! # Fault-Safe Dynamic Key-Value Access
//!
//! A safe accessor layer over dynamic "property by name" access. The native
//! access primitive resolves string keys and dotted key paths against a
//! target object and signals failure by unwinding; this crate intercepts
//! that unwind at a single boundary and hands it back as a structured,
//! inspectable error instead of letting it take the process down.
//!
//! ## Features
//!
//! - **Signal-to-result translation**: every fault raised by a native
//!   accessor is caught at the call boundary and returned as an
//!   [`AccessError`], never re-raised
//! - **Direction-tagged errors**: exactly two stable codes,
//!   `GetValueFault = 1` and `SetValueFault = 2`, matching the operation
//!   that faulted
//! - **Diagnostic payloads**: the captured fault's name and description ride
//!   inside the error under a well-known info key
//! - **Dotted key paths**: get and set through nested properties with
//!   default segment-by-segment traversal
//! - **Open host model**: any type can participate by implementing
//!   [`DynamicAccess`]; JSON object maps work out of the box
//!
//! ## Usage
//!
//! ```rust
//! use kv_safe::{AccessErrorCode, SafeAccess};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut person = json!({ "name": "Ada", "address": { "city": "London" } });
//!
//! // Successful access passes the native result through untouched.
//! person.try_set_value_for_key("age", json!(36))?;
//! assert_eq!(person.try_value_for_key("age")?, json!(36));
//! assert_eq!(person.try_value_for_key_path("address.city")?, json!("London"));
//!
//! // A faulting access comes back as data instead of aborting the process.
//! let err = person.try_value_for_key("ghost").unwrap_err();
//! assert_eq!(err.code(), AccessErrorCode::GetValueFault);
//! assert_eq!(err.domain(), kv_safe::ERROR_DOMAIN);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom targets
//!
//! Native accessors signal failure by raising a [`Fault`], which unwinds
//! with its name and reason intact:
//!
//! ```rust
//! use kv_safe::{DynamicAccess, Fault, SafeAccess};
//! use serde_json::{Value, json};
//!
//! struct Sensor {
//!     label: String,
//! }
//!
//! impl DynamicAccess for Sensor {
//!     fn value_for_key(&self, key: &str) -> Value {
//!         match key {
//!             "label" => Value::String(self.label.clone()),
//!             _ => Fault::undefined_key(key).raise(),
//!         }
//!     }
//!
//!     fn set_value_for_key(&mut self, key: &str, value: Value) {
//!         match (key, value) {
//!             ("label", Value::String(label)) => self.label = label,
//!             ("label", other) => Fault::invalid_value(key, other).raise(),
//!             (_, _) => Fault::undefined_key(key).raise(),
//!         }
//!     }
//! }
//!
//! let mut sensor = Sensor { label: "tank_a".into() };
//! assert!(sensor.try_set_value_for_key("label", json!("tank_b")).is_ok());
//! assert!(sensor.try_set_value_for_key("volume", json!(10)).is_err());
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<_, AccessError>`. An error is produced if
//! and only if the native accessor unwound during the call; a successful
//! call never yields one. Callers branch on [`AccessError::code`] or match
//! the variant directly:
//!
//! ```rust
//! use kv_safe::{AccessError, SafeAccess};
//! use serde_json::json;
//!
//! let target = json!({});
//! match target.try_value_for_key("ghost") {
//!     Ok(value) => println!("value: {value}"),
//!     Err(AccessError::GetValueFault { key, fault }) => {
//!         eprintln!("reading '{key}' faulted: {fault}");
//!     }
//!     Err(other) => eprintln!("unexpected: {other}"),
//! }
//! ```
//!
//! ## Thread Safety
//!
//! The boundary is synchronous and stateless: one native call in, one result
//! out, no caching, no locks. Concurrency behavior is inherited entirely
//! from the target; `&mut` already serializes writers of a single target.
//!
//! ## Panic Strategy
//!
//! Fault capture is built on `std::panic::catch_unwind` and requires the
//! default `panic = "unwind"` strategy. Under `panic = "abort"` there is no
//! recoverable signal left to translate.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod dynamic;
pub mod error;
pub mod fault;

pub use access::SafeAccess;
pub use dynamic::DynamicAccess;
pub use error::{
    AccessError, AccessErrorCode, AccessResult, ERROR_DOMAIN, ERROR_INFO_EXCEPTION_KEY,
};
pub use fault::{
    CapturedFault, Fault, GENERIC_FAULT, INVALID_VALUE_FAULT, NOT_ADDRESSABLE_FAULT,
    UNDEFINED_KEY_FAULT,
};

/// Initialize tracing for boundary diagnostics
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
