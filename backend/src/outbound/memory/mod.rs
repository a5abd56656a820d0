//! In-memory repositories used when no database is configured and in tests.
//!
//! Rows live in an id-ordered map behind a mutex, so listing is naturally
//! ordered by id and each request sees a consistent view. Ids start at 1 and
//! are never reused, matching a database sequence.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    ScheduleRepository, ScheduleRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Schedule, ScheduleDraft, ScheduleId, User, UserDraft, UserId};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn replace(&mut self, id: i64, row: T) -> bool {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }
}

fn lock<T>(table: &Mutex<Table<T>>) -> Option<MutexGuard<'_, Table<T>>> {
    table.lock().ok()
}

/// Mutex-guarded user table.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    fn table(&self) -> Result<MutexGuard<'_, Table<User>>, UserRepositoryError> {
        lock(&self.table).ok_or_else(|| UserRepositoryError::query("user table lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.table()?.list())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.table()?.get(id.get()))
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserRepositoryError> {
        Ok(self
            .table()?
            .insert_with(|id| User::new(UserId::new(id), draft.clone())))
    }

    async fn update(&self, user: &User) -> Result<bool, UserRepositoryError> {
        Ok(self.table()?.replace(user.id().get(), user.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        Ok(self.table()?.remove(id.get()))
    }
}

/// Mutex-guarded schedule table.
#[derive(Debug, Default)]
pub struct InMemoryScheduleRepository {
    table: Mutex<Table<Schedule>>,
}

impl InMemoryScheduleRepository {
    fn table(&self) -> Result<MutexGuard<'_, Table<Schedule>>, ScheduleRepositoryError> {
        lock(&self.table)
            .ok_or_else(|| ScheduleRepositoryError::query("schedule table lock poisoned"))
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn list_all(&self) -> Result<Vec<Schedule>, ScheduleRepositoryError> {
        Ok(self.table()?.list())
    }

    async fn find_by_id(
        &self,
        id: ScheduleId,
    ) -> Result<Option<Schedule>, ScheduleRepositoryError> {
        Ok(self.table()?.get(id.get()))
    }

    async fn insert(&self, draft: &ScheduleDraft) -> Result<Schedule, ScheduleRepositoryError> {
        Ok(self
            .table()?
            .insert_with(|id| Schedule::new(ScheduleId::new(id), draft.clone())))
    }

    async fn update(&self, schedule: &Schedule) -> Result<bool, ScheduleRepositoryError> {
        Ok(self.table()?.replace(schedule.id().get(), schedule.clone()))
    }

    async fn delete(&self, id: ScheduleId) -> Result<bool, ScheduleRepositoryError> {
        Ok(self.table()?.remove(id.get()))
    }
}
