//! Port abstraction for schedule persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Schedule, ScheduleDraft, ScheduleId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by schedule repository adapters.
    pub enum ScheduleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "schedule repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "schedule repository query failed: {message}",
    }
}

/// Row storage for work schedule entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Every stored schedule, ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Schedule>, ScheduleRepositoryError>;

    /// Fetch a schedule by identifier.
    async fn find_by_id(&self, id: ScheduleId)
    -> Result<Option<Schedule>, ScheduleRepositoryError>;

    /// Insert a new row and return it with its assigned id.
    async fn insert(&self, draft: &ScheduleDraft) -> Result<Schedule, ScheduleRepositoryError>;

    /// Overwrite the row with the same id, returning `false` when it is absent.
    async fn update(&self, schedule: &Schedule) -> Result<bool, ScheduleRepositoryError>;

    /// Remove a row permanently, returning `false` when it is absent.
    async fn delete(&self, id: ScheduleId) -> Result<bool, ScheduleRepositoryError>;
}
