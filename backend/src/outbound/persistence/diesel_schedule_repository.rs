//! PostgreSQL-backed `ScheduleRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ScheduleRepository, ScheduleRepositoryError};
use crate::domain::{Schedule, ScheduleDraft, ScheduleId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ScheduleRow, ScheduleValues};
use super::pool::{DbPool, PoolError};
use super::schema::schedules;

/// Diesel-backed implementation of the [`ScheduleRepository`] port.
#[derive(Clone)]
pub struct DieselScheduleRepository {
    pool: DbPool,
}

impl DieselScheduleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ScheduleRepositoryError {
    map_pool_error(error, ScheduleRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ScheduleRepositoryError {
    map_diesel_error(
        error,
        ScheduleRepositoryError::query,
        ScheduleRepositoryError::connection,
    )
}

#[async_trait]
impl ScheduleRepository for DieselScheduleRepository {
    async fn list_all(&self) -> Result<Vec<Schedule>, ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<ScheduleRow> = schedules::table
            .order(schedules::id.asc())
            .select(ScheduleRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Schedule::from).collect())
    }

    async fn find_by_id(
        &self,
        id: ScheduleId,
    ) -> Result<Option<Schedule>, ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<ScheduleRow> = schedules::table
            .find(id.get())
            .select(ScheduleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Schedule::from))
    }

    async fn insert(&self, draft: &ScheduleDraft) -> Result<Schedule, ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: ScheduleRow = diesel::insert_into(schedules::table)
            .values(&ScheduleValues::from_draft(draft))
            .returning(ScheduleRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(Schedule::from(row))
    }

    async fn update(&self, schedule: &Schedule) -> Result<bool, ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let updated = diesel::update(schedules::table.find(schedule.id().get()))
            .set(&ScheduleValues::from_schedule(schedule))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: ScheduleId) -> Result<bool, ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let deleted = diesel::delete(schedules::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }
}
