//! Tri-state outcome carrier for service-layer results.
//!
//! [`Outcome`] communicates "not yet resolved" alongside success and failure,
//! so layers reporting on asynchronous or multi-step work can do so with a
//! single type. It is deliberately a plain data carrier, not a monadic result
//! type: construction performs no validation, and no accessor interprets the
//! status to gate access to the value or error. Callers own that consistency.
//!
//! # Example
//!
//! ```
//! use outcome::{Outcome, OutcomeStatus};
//!
//! let resolved: Outcome<u32, String> = Outcome::success(42);
//! assert_eq!(resolved.status, OutcomeStatus::Success);
//! assert_eq!(resolved.value, Some(42));
//! assert_eq!(resolved.error, None);
//! ```

use serde::{Deserialize, Serialize};

/// Resolution state of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The operation has not resolved yet.
    Pending,
    /// The operation resolved with a value.
    Success,
    /// The operation resolved with an error.
    Error,
}

/// Result of an operation that may still be pending.
///
/// All three fields are public and independently settable through a struct
/// literal; the constructors cover the consistent shapes. Instances are
/// immutable by convention once constructed and safe to share across
/// concurrent readers. Equality and hashing are structural over all three
/// fields, so the type works as a map value and in test assertions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome<T, E> {
    /// Resolution state of the operation.
    pub status: OutcomeStatus,
    /// Success value, conventionally present only when `status` is
    /// [`OutcomeStatus::Success`].
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<T>,
    /// Error value, conventionally present only when `status` is
    /// [`OutcomeStatus::Error`].
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<E>,
}

impl<T, E> Outcome<T, E> {
    /// An outcome that has not resolved yet.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            status: OutcomeStatus::Pending,
            value: None,
            error: None,
        }
    }

    /// A resolved, successful outcome carrying `value`.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self {
            status: OutcomeStatus::Success,
            value: Some(value),
            error: None,
        }
    }

    /// A resolved, failed outcome carrying `error`.
    #[must_use]
    pub const fn error(error: E) -> Self {
        Self {
            status: OutcomeStatus::Error,
            value: None,
            error: Some(error),
        }
    }
}
