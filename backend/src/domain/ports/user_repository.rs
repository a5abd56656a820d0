//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Row storage for users.
///
/// Identifiers are assigned by the store on insert and never reused for a
/// different row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a new row and return it with its assigned id.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserRepositoryError>;

    /// Overwrite the row with the same id.
    ///
    /// Returns `false` when no such row exists.
    async fn update(&self, user: &User) -> Result<bool, UserRepositoryError>;

    /// Remove a row permanently.
    ///
    /// Returns `false` when no such row exists.
    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}
