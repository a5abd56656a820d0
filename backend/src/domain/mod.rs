//! Domain primitives, services and ports.
//!
//! Purpose: define the users and schedules entities, the validation rules
//! applied to client forms, and the services that implement the driving
//! ports on top of repository ports. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with validation detail.
//! - User / Schedule: persisted entities and their forms.
//! - UsersService / SchedulesService: driving port implementations.
//! - ExampleDataSeeder: inserts fixture rows into empty stores.

pub mod error;
pub mod example_data;
pub mod ports;
pub mod schedule;
pub mod schedules_service;
pub mod trace_id;
pub mod user;
pub mod users_service;
pub mod validation;

pub use self::error::{EntityKind, Error, ErrorCode, MissingEntity};
pub use self::example_data::{
    ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError, SeedDataset,
    SeedSchedule, SeedUser, SeedingResult,
};
pub use self::schedule::{Schedule, ScheduleDraft, ScheduleForm, ScheduleId};
pub use self::schedules_service::SchedulesService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserForm, UserId};
pub use self::users_service::UsersService;
pub use self::validation::{Constraint, FieldValue, Violation, Violations};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use business_backend::domain::{ApiResult, EntityKind, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found(EntityKind::User, 1))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
