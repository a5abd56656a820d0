//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are implemented by domain services
//! and called by inbound adapters. Driven ports (`*Repository`) are
//! implemented by outbound adapters. Each repository exposes a strongly
//! typed error so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod schedule_repository;
mod schedules_command;
mod schedules_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use schedule_repository::MockScheduleRepository;
pub use schedule_repository::{ScheduleRepository, ScheduleRepositoryError};
#[cfg(test)]
pub use schedules_command::MockSchedulesCommand;
pub use schedules_command::SchedulesCommand;
#[cfg(test)]
pub use schedules_query::MockSchedulesQuery;
pub use schedules_query::SchedulesQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
