//! Aggregation of failure collections into a flat error map.
//!
//! Both failure kinds converge on the same flat key namespace: binding
//! failures key on the field name verbatim, constraint failures on the leaf
//! segment of their property path.

use std::collections::BTreeMap;

use crate::failure::{ConstraintFailure, FieldFailure};

/// Message substituted when a field failure carries no default message.
pub const FALLBACK_MESSAGE: &str = "Invalid value";

/// Flat mapping from field or leaf property name to a client-facing message.
///
/// Keys are unique; when two failures resolve to the same key, the last one
/// processed wins (in input iteration order). Map iteration order is by key
/// and carries no contract.
pub type ErrorMap = BTreeMap<String, String>;

/// Aggregates binding failures into an [`ErrorMap`].
///
/// Each failure's field name is used verbatim as the key. The value is the
/// failure's own message, or [`FALLBACK_MESSAGE`] when the binding layer
/// produced none. An empty input yields an empty map; this never fails.
#[must_use]
pub fn aggregate_field_failures(failures: impl IntoIterator<Item = FieldFailure>) -> ErrorMap {
    failures
        .into_iter()
        .map(|failure| {
            let message = failure
                .message
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned());
            (failure.field, message)
        })
        .collect()
}

/// Aggregates constraint failures into an [`ErrorMap`].
///
/// The key is the leaf segment of the failure's property path: the substring
/// after the last `.`, the whole path when it contains no `.`, and the empty
/// string when the path is absent. Constraint evaluation on nested or
/// parameterised invocations produces verbose paths such as
/// `createUser.arg0.email`; clients only care about the leaf field name,
/// which also matches the flat keys binding failures produce.
#[must_use]
pub fn aggregate_constraint_failures(
    failures: impl IntoIterator<Item = ConstraintFailure>,
) -> ErrorMap {
    failures
        .into_iter()
        .map(|failure| {
            let key = failure
                .property_path
                .as_deref()
                .map_or("", leaf_segment)
                .to_owned();
            (key, failure.message)
        })
        .collect()
}

/// Final component of a dot-delimited path.
fn leaf_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
