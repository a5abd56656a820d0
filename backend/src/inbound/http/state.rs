//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ScheduleRepository, SchedulesCommand, SchedulesQuery, UserRepository, UsersCommand,
    UsersQuery,
};
use crate::domain::{SchedulesService, UsersService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub schedules: Arc<dyn SchedulesQuery>,
    pub schedules_command: Arc<dyn SchedulesCommand>,
}

impl HttpState {
    /// Construct state from individual ports.
    pub fn new(
        users: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
        schedules: Arc<dyn SchedulesQuery>,
        schedules_command: Arc<dyn SchedulesCommand>,
    ) -> Self {
        Self {
            users,
            users_command,
            schedules,
            schedules_command,
        }
    }

    /// Construct state where each service serves both its query and command
    /// ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use business_backend::domain::{SchedulesService, UsersService};
    /// use business_backend::inbound::http::state::HttpState;
    /// use business_backend::outbound::memory::{
    ///     InMemoryScheduleRepository, InMemoryUserRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let users = Arc::new(UsersService::new(Arc::new(InMemoryUserRepository::default())));
    /// let schedules = Arc::new(SchedulesService::new(
    ///     Arc::new(InMemoryScheduleRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::from_services(users, schedules);
    /// let _users = state.users.clone();
    /// ```
    pub fn from_services<U, S>(
        users: Arc<UsersService<U>>,
        schedules: Arc<SchedulesService<S>>,
    ) -> Self
    where
        U: UserRepository + 'static,
        S: ScheduleRepository + 'static,
    {
        Self {
            users: users.clone(),
            users_command: users,
            schedules: schedules.clone(),
            schedules_command: schedules,
        }
    }
}
