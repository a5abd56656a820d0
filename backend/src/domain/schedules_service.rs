//! Work schedule domain service.
//!
//! Implements the schedule driving ports on top of a [`ScheduleRepository`].
//! The working date rule is evaluated against the injected clock's local
//! date so tests can pin "today".

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    ScheduleRepository, ScheduleRepositoryError, SchedulesCommand, SchedulesQuery,
};
use crate::domain::{EntityKind, Error, Schedule, ScheduleForm, ScheduleId};

/// Schedule service implementing [`SchedulesQuery`] and [`SchedulesCommand`].
#[derive(Clone)]
pub struct SchedulesService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> SchedulesService<R> {
    /// Create a new service backed by `repo`, reading dates from `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl<R> SchedulesService<R>
where
    R: ScheduleRepository,
{
    fn map_repository_error(error: ScheduleRepositoryError) -> Error {
        match error {
            ScheduleRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("schedule repository unavailable: {message}"))
            }
            ScheduleRepositoryError::Query { message } => {
                Error::internal(format!("schedule repository error: {message}"))
            }
        }
    }

    fn not_found(id: ScheduleId) -> Error {
        Error::not_found(EntityKind::Schedule, id.get())
    }
}

#[async_trait]
impl<R> SchedulesQuery for SchedulesService<R>
where
    R: ScheduleRepository,
{
    async fn list_schedules(&self) -> Result<Vec<Schedule>, Error> {
        self.repo
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_schedule(&self, id: ScheduleId) -> Result<Schedule, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id))
    }
}

#[async_trait]
impl<R> SchedulesCommand for SchedulesService<R>
where
    R: ScheduleRepository,
{
    async fn create_schedule(&self, form: ScheduleForm) -> Result<Schedule, Error> {
        let draft = form.into_draft(self.today())?;
        let schedule = self
            .repo
            .insert(&draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(
            schedule_id = %schedule.id(),
            user_id = %schedule.user_id(),
            "schedule planned"
        );
        Ok(schedule)
    }

    async fn update_schedule(
        &self,
        id: ScheduleId,
        form: ScheduleForm,
    ) -> Result<Schedule, Error> {
        let schedule = Schedule::new(id, form.into_draft(self.today())?);
        let updated = self
            .repo
            .update(&schedule)
            .await
            .map_err(Self::map_repository_error)?;
        if !updated {
            return Err(Self::not_found(id));
        }
        info!(schedule_id = %id, "schedule updated");
        Ok(schedule)
    }

    async fn delete_schedule(&self, id: ScheduleId) -> Result<(), Error> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !deleted {
            return Err(Self::not_found(id));
        }
        info!(schedule_id = %id, "schedule deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "schedules_service_tests.rs"]
mod tests;
