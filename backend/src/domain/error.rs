//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! problem bodies or any other protocol-specific envelope.

use std::fmt;

use super::TraceId;
use super::validation::Violation;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A backing store is temporarily unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Persisted entity families that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A registered user.
    User,
    /// A work schedule entry.
    Schedule,
}

impl EntityKind {
    /// Entity name used in not-found messages.
    #[must_use]
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::User => "UserEntity",
            Self::Schedule => "ScheduleEntity",
        }
    }
}

/// Identifies the row a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingEntity {
    /// Entity family that was queried.
    pub kind: EntityKind,
    /// Identifier that had no matching row.
    pub id: i64,
}

impl fmt::Display for MissingEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id = {}) is not found.",
            self.kind.entity_name(),
            self.id
        )
    }
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use business_backend::domain::{EntityKind, Error, ErrorCode};
///
/// let err = Error::not_found(EntityKind::User, 99);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "UserEntity (id = 99) is not found.");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    violations: Vec<Violation>,
    missing: Option<MissingEntity>,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if one is
    /// in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            violations: Vec::new(),
            missing: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Field violations behind a validation failure, in report order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Entity lookup that failed, for not-found errors.
    #[must_use]
    pub fn missing_entity(&self) -> Option<MissingEntity> {
        self.missing
    }

    /// Correlation identifier captured when the error was raised.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach a trace identifier explicitly.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Validation failure listing every violated field constraint.
    #[must_use]
    pub fn validation(violations: Vec<Violation>) -> Self {
        let mut error = Self::invalid_request(format!(
            "request failed validation on {} constraint(s)",
            violations.len()
        ));
        error.violations = violations;
        error
    }

    /// Not-found error for the entity `kind` with identifier `id`.
    #[must_use]
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        let missing = MissingEntity { kind, id };
        let mut error = Self::new(ErrorCode::NotFound, missing.to_string());
        error.missing = Some(missing);
        error
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
