//! Shared Diesel error mapping for the users and schedules repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error.
///
/// The checkout failure text can name hosts and roles, so it is only logged.
pub(crate) fn map_pool_error<E>(
    error: PoolError,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    debug!(error = %error, "connection pool checkout failed");
    connection("database connection error")
}

/// Map Diesel errors into query or connection constructors.
///
/// The raw Diesel detail is logged at debug level and never propagated.
pub(crate) fn map_diesel_error<E>(
    error: DieselError,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}
