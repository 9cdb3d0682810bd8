//! Plain failure records consumed by the aggregator.
//!
//! The surrounding web layer adapts its native binding and constraint
//! failure objects into these records, keeping the aggregation logic
//! decoupled from any specific deserialisation or validation mechanism.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregate::FALLBACK_MESSAGE;

/// One invalid request field discovered while binding the payload.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{field}: {}", .message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
pub struct FieldFailure {
    /// Field the failure is tied to. Dotted and bracketed paths are allowed
    /// and used verbatim as the error key. Upstream guarantees the name is
    /// non-empty; this record does not enforce it.
    pub field: String,
    /// Default message from the binding layer, absent when it produced none.
    /// The aggregated output substitutes [`FALLBACK_MESSAGE`].
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl FieldFailure {
    /// Failure carrying a default message from the binding layer.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: Some(message.into()),
        }
    }

    /// Failure whose binding layer produced no default message.
    #[must_use]
    pub fn without_message(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: None,
        }
    }
}

/// One invalid already-bound value reported by constraint evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{}: {message}", .property_path.as_deref().unwrap_or_default())]
pub struct ConstraintFailure {
    /// Dot-delimited path of the violated property, possibly nested, e.g.
    /// `createUser.arg0.email`. `None` models an absent path.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub property_path: Option<String>,
    /// Constraint message; always present at the source.
    pub message: String,
}

impl ConstraintFailure {
    /// Failure identified by a property path.
    #[must_use]
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: Some(property_path.into()),
            message: message.into(),
        }
    }

    /// Failure whose property path is absent.
    #[must_use]
    pub fn without_path(message: impl Into<String>) -> Self {
        Self {
            property_path: None,
            message: message.into(),
        }
    }
}
