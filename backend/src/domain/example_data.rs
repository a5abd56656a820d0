//! Example data seeding orchestration.
//!
//! Loads a fixed dataset of users and schedules and inserts it through the
//! repository ports when both stores are still empty. Seed rows bypass form
//! validation: the dataset legitimately contains working dates in the past.
//!
//! A schedule's `userid` in the dataset names a dataset user by position
//! (1-based). It is rewritten to the id the store assigned to that user, so
//! the references hold even when the id sequence no longer starts at 1.
//! Other values are kept verbatim.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::ports::{
    ScheduleRepository, ScheduleRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{ScheduleDraft, UserDraft, UserId};

/// A user row in the seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    pub companyname: String,
    pub username: String,
}

impl From<&SeedUser> for UserDraft {
    fn from(seed: &SeedUser) -> Self {
        Self {
            company_name: seed.companyname.clone(),
            user_name: seed.username.clone(),
        }
    }
}

/// A schedule row in the seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedSchedule {
    pub userid: i64,
    pub workingdate: NaiveDate,
    #[serde(default)]
    pub place: Option<String>,
    pub workcontent: String,
    pub numberofpeople: i32,
}

impl From<&SeedSchedule> for ScheduleDraft {
    fn from(seed: &SeedSchedule) -> Self {
        Self {
            user_id: UserId::new(seed.userid),
            working_date: seed.workingdate,
            place: seed.place.clone(),
            work_content: seed.workcontent.clone(),
            number_of_people: seed.numberofpeople,
        }
    }
}

/// Users and schedules to insert, in id order.
///
/// # Examples
/// ```
/// use business_backend::domain::SeedDataset;
///
/// let dataset = SeedDataset::from_json(
///     r#"{"users":[{"companyname":"○○○会社","username":"瀬川"}],"schedules":[]}"#,
/// )
/// .expect("valid dataset");
/// assert_eq!(dataset.users.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDataset {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub schedules: Vec<SeedSchedule>,
}

impl SeedDataset {
    /// Parse a dataset from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the parser error when the payload is not a valid dataset.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

/// Whether a seeding attempt wrote anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The dataset was inserted.
    Applied,
    /// At least one store already held rows; nothing was written.
    AlreadySeeded,
}

/// Result of attempting to apply example data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    pub users: usize,
    pub schedules: usize,
    pub result: SeedingResult,
}

/// Errors raised while applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    #[error("example user persistence error: {0}")]
    Users(#[from] UserRepositoryError),
    #[error("example schedule persistence error: {0}")]
    Schedules(#[from] ScheduleRepositoryError),
}

fn resolve_user(assigned: &[UserId], seed_ref: UserId) -> UserId {
    usize::try_from(seed_ref.get())
        .ok()
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| assigned.get(index).copied())
        .unwrap_or(seed_ref)
}

/// Service that inserts a [`SeedDataset`] into empty stores.
#[derive(Clone)]
pub struct ExampleDataSeeder<U, S> {
    users: Arc<U>,
    schedules: Arc<S>,
}

impl<U, S> ExampleDataSeeder<U, S> {
    /// Create a new seeder writing through the given repositories.
    pub fn new(users: Arc<U>, schedules: Arc<S>) -> Self {
        Self { users, schedules }
    }
}

impl<U, S> ExampleDataSeeder<U, S>
where
    U: UserRepository,
    S: ScheduleRepository,
{
    /// Insert `dataset` unless either store already holds rows.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] when a repository call fails.
    /// Rows inserted before the failure are kept.
    pub async fn seed(
        &self,
        dataset: &SeedDataset,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let users_present = !self.users.list_all().await?.is_empty();
        let schedules_present = !self.schedules.list_all().await?.is_empty();
        if users_present || schedules_present {
            return Ok(ExampleDataSeedOutcome {
                users: 0,
                schedules: 0,
                result: SeedingResult::AlreadySeeded,
            });
        }

        let mut assigned = Vec::with_capacity(dataset.users.len());
        for user in &dataset.users {
            assigned.push(self.users.insert(&UserDraft::from(user)).await?.id());
        }
        for schedule in &dataset.schedules {
            let mut draft = ScheduleDraft::from(schedule);
            draft.user_id = resolve_user(&assigned, draft.user_id);
            self.schedules.insert(&draft).await?;
        }

        Ok(ExampleDataSeedOutcome {
            users: dataset.users.len(),
            schedules: dataset.schedules.len(),
            result: SeedingResult::Applied,
        })
    }
}
