//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning domain
//! failures into problem-detail JSON bodies (`title`, `detail`,
//! `invalidParams`) and status codes. The trace identifier travels in the
//! `trace-id` response header only, so bodies stay exactly as documented.
//! Server-side failures carry a fixed detail; their messages are logged only.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER, Violation};

pub use crate::domain::ApiResult;

/// Detail returned for every rejected request.
pub const BAD_REQUEST_DETAIL: &str = "リクエストが不正です。正しいリクエストでリトライしてください";

const INTERNAL_DETAIL: &str = "Internal server error";
const UNAVAILABLE_DETAIL: &str = "Service temporarily unavailable";

/// One rejected field in a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InvalidParam {
    /// Wire name of the field.
    #[schema(example = "companyname")]
    pub name: String,
    /// Why the value was rejected.
    #[schema(example = "must not be blank")]
    pub reason: String,
}

impl From<&Violation> for InvalidParam {
    fn from(violation: &Violation) -> Self {
        Self {
            name: violation.field().to_owned(),
            reason: violation.reason().to_owned(),
        }
    }
}

/// Problem-detail body returned for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[schema(example = "Resource Not Found")]
    pub title: String,
    #[schema(example = "UserEntity (id = 99) is not found.")]
    pub detail: String,
    /// Present only for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_params: Option<Vec<InvalidParam>>,
}

impl From<&Error> for ProblemDetails {
    fn from(error: &Error) -> Self {
        let (title, detail) = match error.code() {
            ErrorCode::InvalidRequest => ("Bad Request", BAD_REQUEST_DETAIL),
            ErrorCode::NotFound => ("Resource Not Found", error.message()),
            ErrorCode::ServiceUnavailable => ("Service Unavailable", UNAVAILABLE_DETAIL),
            ErrorCode::InternalError => ("Internal Server Error", INTERNAL_DETAIL),
        };
        let invalid_params = (!error.violations().is_empty())
            .then(|| error.violations().iter().map(InvalidParam::from).collect());
        Self {
            title: title.to_owned(),
            detail: detail.to_owned(),
            invalid_params,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!(
                code = ?self.code(),
                message = self.message(),
                trace_id = self.trace_id(),
                "request failed"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ProblemDetails::from(self))
    }
}

/// Reject bodies that cannot be decoded into the request type.
///
/// Installed through [`actix_web::web::JsonConfig`].
pub fn json_error_handler(err: &JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "malformed JSON body");
    Error::invalid_request(format!("malformed request body: {err}")).into()
}

/// Reject path segments that do not parse, such as non-numeric ids.
///
/// Installed through [`actix_web::web::PathConfig`].
pub fn path_error_handler(err: &PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "malformed path parameter");
    Error::invalid_request(format!("malformed path parameter: {err}")).into()
}

#[cfg(test)]
mod tests;
