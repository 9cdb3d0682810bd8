//! Validation-error normalisation for HTTP APIs.
//!
//! Request validation raises two structurally different failure shapes:
//! field failures discovered while binding the payload, and constraint
//! failures discovered by evaluating declarative constraints against
//! already-bound values. This crate converges both on one client-facing
//! problem document so API consumers see a single error shape regardless of
//! where validation failed.
//!
//! The aggregation and document construction are pure; the Actix adapter in
//! [`handle_binding_failures`] and [`handle_constraint_violations`] adds
//! logging and the HTTP response mapping.
//!
//! # Example
//!
//! ```
//! use validation_problem::{FieldFailure, ProblemDocument};
//!
//! let failures = vec![FieldFailure::new("email", "must be a well-formed email")];
//! let document = ProblemDocument::from_field_failures(failures);
//!
//! assert_eq!(document.status(), 400);
//! assert_eq!(
//!     document.errors().get("email").map(String::as_str),
//!     Some("must be a well-formed email"),
//! );
//! ```

mod aggregate;
mod document;
mod failure;
mod http;

pub use aggregate::{
    ErrorMap, FALLBACK_MESSAGE, aggregate_constraint_failures, aggregate_field_failures,
};
pub use document::{DEFAULT_DETAIL, DEFAULT_TITLE, PROBLEM_STATUS, ProblemDocument};
pub use failure::{ConstraintFailure, FieldFailure};
pub use http::{PROBLEM_JSON, handle_binding_failures, handle_constraint_violations};
