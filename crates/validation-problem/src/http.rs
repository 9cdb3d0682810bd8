//! Actix adapter turning failure collections into problem responses.
//!
//! The surrounding dispatch layer explicitly calls these entry points when it
//! catches one of the two recognised failure kinds. Logging happens here so
//! the aggregation and document construction stay pure.

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::info;

use crate::document::ProblemDocument;
use crate::failure::{ConstraintFailure, FieldFailure};

/// Media type of the serialised problem document.
pub const PROBLEM_JSON: &str = "application/problem+json";

impl ResponseError for ProblemDocument {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code()).json(self);
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

/// Handles payload binding failures for the current request.
///
/// Terminal for the request: the failures are fully recovered into a 400
/// document and nothing propagates past this layer. An empty collection
/// still yields a complete document with an empty `errors` map.
#[must_use]
pub fn handle_binding_failures(failures: Vec<FieldFailure>) -> ProblemDocument {
    info!(
        failure_count = failures.len(),
        "handling request binding failures"
    );
    ProblemDocument::from_field_failures(failures)
}

/// Handles constraint violations raised outside the binding path.
///
/// Produces a document indistinguishable from the binding case; clients see
/// one uniform error shape for both failure kinds.
#[must_use]
pub fn handle_constraint_violations(failures: Vec<ConstraintFailure>) -> ProblemDocument {
    info!(
        failure_count = failures.len(),
        "handling constraint violations"
    );
    ProblemDocument::from_constraint_failures(failures)
}

#[cfg(test)]
mod tests;
