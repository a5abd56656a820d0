//! Builders wiring repositories into the services behind the HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use business_backend::domain::ports::{ScheduleRepository, UserRepository};
use business_backend::domain::{SchedulesService, UsersService};
use business_backend::example_data::{
    ExampleDataSettings, StartupSeedingError, seed_example_data_on_startup,
};
use business_backend::inbound::http::state::HttpState;
use business_backend::outbound::memory::{InMemoryScheduleRepository, InMemoryUserRepository};
use business_backend::outbound::persistence::{
    DbPool, DieselScheduleRepository, DieselUserRepository,
};

/// Build HTTP state over PostgreSQL when a pool is available, otherwise over
/// the in-memory store. Example data is applied to whichever store is chosen.
pub async fn build_http_state(
    db_pool: Option<&DbPool>,
    seeding: &ExampleDataSettings,
) -> Result<HttpState, StartupSeedingError> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match db_pool {
        Some(pool) => {
            info!(store = "postgres", "wiring repositories");
            wire(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselScheduleRepository::new(pool.clone())),
                clock,
                seeding,
            )
            .await
        }
        None => {
            info!(store = "memory", "wiring repositories");
            wire(
                Arc::new(InMemoryUserRepository::default()),
                Arc::new(InMemoryScheduleRepository::default()),
                clock,
                seeding,
            )
            .await
        }
    }
}

async fn wire<U, S>(
    users: Arc<U>,
    schedules: Arc<S>,
    clock: Arc<dyn Clock>,
    seeding: &ExampleDataSettings,
) -> Result<HttpState, StartupSeedingError>
where
    U: UserRepository + 'static,
    S: ScheduleRepository + 'static,
{
    seed_example_data_on_startup(seeding, users.clone(), schedules.clone()).await?;
    Ok(HttpState::from_services(
        Arc::new(UsersService::new(users)),
        Arc::new(SchedulesService::new(schedules, clock)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use business_backend::domain::ports::{SchedulesQuery, UsersQuery};
    use rstest::rstest;

    #[rstest]
    #[actix_rt::test]
    async fn in_memory_state_is_seeded_when_enabled() {
        let settings = ExampleDataSettings {
            enabled: true,
            path: None,
        };
        let state = build_http_state(None, &settings)
            .await
            .expect("state builds");
        let schedules = state.schedules.list_schedules().await.expect("list");
        assert_eq!(schedules.len(), 4);
    }

    #[rstest]
    #[actix_rt::test]
    async fn in_memory_state_starts_empty_by_default() {
        let state = build_http_state(None, &ExampleDataSettings::default())
            .await
            .expect("state builds");
        assert!(state.users.list_users().await.expect("list").is_empty());
    }
}
