//! Error types for safe key-value access operations

use crate::fault::CapturedFault;
use serde_json::{Map, Value};
use thiserror::Error;

/// Error domain distinguishing this crate's errors from other sources
pub const ERROR_DOMAIN: &str = "SafeKeyValueAccess";

/// Key under which the captured fault appears in [`AccessError::info`]
pub const ERROR_INFO_EXCEPTION_KEY: &str = "exception";

/// Stable numeric error codes, tagged by operation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum AccessErrorCode {
    /// A fault was captured while reading a property
    GetValueFault = 1,
    /// A fault was captured while writing a property
    SetValueFault = 2,
}

/// Errors produced when a native accessor faults
///
/// Exactly two kinds exist, one per operation direction. Both wrap the same
/// underlying cause class (an unwind out of the native accessor) so callers
/// can branch on direction without inspecting the payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Fault captured during a get-by-key or get-by-key-path call
    #[error("get value fault for key '{key}': {fault}")]
    GetValueFault {
        /// Key or key path being read
        key: String,
        /// Diagnostic payload of the captured fault
        fault: CapturedFault,
    },

    /// Fault captured during a set-by-key or set-by-key-path call
    #[error("set value fault for key '{key}': {fault}")]
    SetValueFault {
        /// Key or key path being written
        key: String,
        /// Diagnostic payload of the captured fault
        fault: CapturedFault,
    },
}

impl AccessError {
    pub(crate) fn new(code: AccessErrorCode, key: &str, fault: CapturedFault) -> Self {
        let key = key.to_string();
        match code {
            AccessErrorCode::GetValueFault => Self::GetValueFault { key, fault },
            AccessErrorCode::SetValueFault => Self::SetValueFault { key, fault },
        }
    }

    /// Error domain, always [`ERROR_DOMAIN`]
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }

    /// Numeric code matching the operation direction that faulted
    pub fn code(&self) -> AccessErrorCode {
        match self {
            Self::GetValueFault { .. } => AccessErrorCode::GetValueFault,
            Self::SetValueFault { .. } => AccessErrorCode::SetValueFault,
        }
    }

    /// Key or key path the failed operation was addressing
    pub fn key(&self) -> &str {
        match self {
            Self::GetValueFault { key, .. } | Self::SetValueFault { key, .. } => key,
        }
    }

    /// The fault captured from the native accessor
    pub fn fault(&self) -> &CapturedFault {
        match self {
            Self::GetValueFault { fault, .. } | Self::SetValueFault { fault, .. } => fault,
        }
    }

    /// Diagnostic mapping with the captured fault under [`ERROR_INFO_EXCEPTION_KEY`]
    pub fn info(&self) -> Map<String, Value> {
        let fault = self.fault();
        let mut exception = Map::new();
        exception.insert("name".to_string(), Value::String(fault.name.clone()));
        exception.insert(
            "description".to_string(),
            Value::String(fault.description.clone()),
        );

        let mut info = Map::new();
        info.insert(
            ERROR_INFO_EXCEPTION_KEY.to_string(),
            Value::Object(exception),
        );
        info
    }

    /// Full error shape as JSON: domain, code, and info mapping
    pub fn report(&self) -> Value {
        let mut report = Map::new();
        report.insert("domain".to_string(), Value::String(ERROR_DOMAIN.to_string()));
        report.insert("code".to_string(), Value::from(self.code() as i32));
        report.insert("info".to_string(), Value::Object(self.info()));
        Value::Object(report)
    }
}

/// Result alias for safe accessor operations
pub type AccessResult<T> = Result<T, AccessError>;
