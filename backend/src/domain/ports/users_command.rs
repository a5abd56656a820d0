//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserForm, UserId};

/// Domain use-case port for registering, editing and removing users.
///
/// Forms are validated before any write; a rejected form surfaces as an
/// [`crate::domain::ErrorCode::InvalidRequest`] error listing every
/// violation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate and store a new user.
    async fn create_user(&self, form: UserForm) -> Result<User, Error>;

    /// Validate and overwrite an existing user.
    async fn update_user(&self, id: UserId, form: UserForm) -> Result<User, Error>;

    /// Remove an existing user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
