//! Driving port for schedule mutations.

use async_trait::async_trait;

use crate::domain::{Error, Schedule, ScheduleForm, ScheduleId};

/// Domain use-case port for planning, editing and removing work schedules.
///
/// The working date rule is judged against the service clock at the time
/// of the call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchedulesCommand: Send + Sync {
    async fn create_schedule(&self, form: ScheduleForm) -> Result<Schedule, Error>;

    async fn update_schedule(&self, id: ScheduleId, form: ScheduleForm)
    -> Result<Schedule, Error>;

    async fn delete_schedule(&self, id: ScheduleId) -> Result<(), Error>;
}
