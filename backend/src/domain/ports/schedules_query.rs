//! Driving port for schedule reads.

use async_trait::async_trait;

use crate::domain::{Error, Schedule, ScheduleId};

/// Domain use-case port for reading work schedules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchedulesQuery: Send + Sync {
    /// All schedules ordered by id.
    async fn list_schedules(&self) -> Result<Vec<Schedule>, Error>;

    /// A single schedule, or a not-found error naming the id.
    async fn get_schedule(&self, id: ScheduleId) -> Result<Schedule, Error>;
}
