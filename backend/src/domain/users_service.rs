//! User domain service.
//!
//! Implements the user driving ports on top of a [`UserRepository`],
//! validating forms before any write and translating missing rows into
//! not-found errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{EntityKind, Error, User, UserForm, UserId};

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UsersService<R> {
    repo: Arc<R>,
}

impl<R> UsersService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> UsersService<R>
where
    R: UserRepository,
{
    fn map_repository_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    fn not_found(id: UserId) -> Error {
        Error::not_found(EntityKind::User, id.get())
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repo
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, form: UserForm) -> Result<User, Error> {
        let draft = form.into_draft()?;
        let user = self
            .repo
            .insert(&draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, form: UserForm) -> Result<User, Error> {
        let user = User::new(id, form.into_draft()?);
        let updated = self
            .repo
            .update(&user)
            .await
            .map_err(Self::map_repository_error)?;
        if !updated {
            return Err(Self::not_found(id));
        }
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !deleted {
            return Err(Self::not_found(id));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
