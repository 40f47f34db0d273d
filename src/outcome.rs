//! Uniform operation result.
//!
//! Every service operation reports back through an [`Outcome`] instead of
//! returning an error: store failures are captured into `errors` and never
//! cross the service boundary.

use serde::Serialize;

/// Result record returned by every service operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Low-level diagnostics (empty on success).
    pub errors: Vec<String>,
    /// Operation-specific payload, present only on success.
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// Successful outcome carrying a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Successful outcome without a payload.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: Vec::new(),
            data: None,
        }
    }

    /// Failed outcome with a message and no diagnostics.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Vec::new(),
            data: None,
        }
    }

    /// Failed outcome for an underlying store error.
    ///
    /// The message reads `"<context>: <error>"` and the error text is also
    /// pushed onto `errors`.
    pub fn store_failure(context: &str, err: impl std::fmt::Display) -> Self {
        let detail = err.to_string();
        Self {
            success: false,
            message: format!("{context}: {detail}"),
            errors: vec![detail],
            data: None,
        }
    }
}
