//! Client-facing problem document with fixed status, title, and detail.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::aggregate::{self, ErrorMap};
use crate::failure::{ConstraintFailure, FieldFailure};

/// HTTP status carried by every problem document.
pub const PROBLEM_STATUS: u16 = 400;

/// Title carried by every problem document.
pub const DEFAULT_TITLE: &str = "Bean validation error";

/// Detail carried by every problem document.
pub const DEFAULT_DETAIL: &str = "One or more fields were invalid. See 'errors' for details.";

/// Standard error document returned for binding and constraint failures.
///
/// Both failure kinds produce documents of identical shape; clients can only
/// tell them apart by the keys present in `errors`, which are already
/// normalised to the same flat namespace. The document is immutable once
/// constructed and implements [`std::error::Error`] so handlers can propagate
/// it with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[error("{detail}")]
pub struct ProblemDocument {
    #[schema(example = 400)]
    status: u16,
    #[schema(example = "Bean validation error")]
    title: String,
    #[schema(example = "One or more fields were invalid. See 'errors' for details.")]
    detail: String,
    #[schema(example = json!({"email": "must be a well-formed email"}))]
    errors: ErrorMap,
}

impl ProblemDocument {
    /// Wraps an aggregated error map in a document with the fixed status,
    /// title, and detail. The map is stored as-is; the `errors` field is
    /// always emitted, even when the map is empty.
    #[must_use]
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            status: PROBLEM_STATUS,
            title: DEFAULT_TITLE.to_owned(),
            detail: DEFAULT_DETAIL.to_owned(),
            errors,
        }
    }

    /// Aggregates binding failures and wraps the result.
    #[must_use]
    pub fn from_field_failures(failures: impl IntoIterator<Item = FieldFailure>) -> Self {
        Self::from_errors(aggregate::aggregate_field_failures(failures))
    }

    /// Aggregates constraint failures and wraps the result.
    #[must_use]
    pub fn from_constraint_failures(failures: impl IntoIterator<Item = ConstraintFailure>) -> Self {
        Self::from_errors(aggregate::aggregate_constraint_failures(failures))
    }

    /// HTTP status of the document; always [`PROBLEM_STATUS`].
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Document title; always [`DEFAULT_TITLE`].
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Document detail; always [`DEFAULT_DETAIL`].
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Field-to-message mapping; possibly empty, never absent.
    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }
}
