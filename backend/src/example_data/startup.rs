//! Startup seeding orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{ScheduleRepository, UserRepository};
use crate::domain::{
    ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError, SeedDataset,
    SeedingResult,
};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Dataset file could not be read.
    #[error("failed to read dataset at {path}: {source}")]
    DatasetRead {
        /// Path to the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Dataset parsing failed.
    #[error("dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),
    /// Persistence failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
}

/// Apply example data on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use business_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use business_backend::outbound::memory::{InMemoryScheduleRepository, InMemoryUserRepository};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: true,
///     path: None,
/// };
/// let outcome = seed_example_data_on_startup(
///     &settings,
///     Arc::new(InMemoryUserRepository::default()),
///     Arc::new(InMemoryScheduleRepository::default()),
/// )
/// .await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup<U, S>(
    settings: &ExampleDataSettings,
    users: Arc<U>,
    schedules: Arc<S>,
) -> Result<Option<ExampleDataSeedOutcome>, StartupSeedingError>
where
    U: UserRepository,
    S: ScheduleRepository,
{
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let path = settings.dataset_path();
    let dataset = load_dataset(&path)?;
    let outcome = ExampleDataSeeder::new(users, schedules)
        .seed(&dataset)
        .await?;

    match outcome.result {
        SeedingResult::Applied => info!(
            path = %path.display(),
            users = outcome.users,
            schedules = outcome.schedules,
            "example data seeding applied"
        ),
        SeedingResult::AlreadySeeded => info!(
            path = %path.display(),
            "stores already hold data; example data seeding skipped"
        ),
    }

    Ok(Some(outcome))
}

/// Read and parse a seed dataset through a capability-scoped directory
/// handle.
pub fn load_dataset(path: &Path) -> Result<SeedDataset, StartupSeedingError> {
    let read_error = |source: std::io::Error| StartupSeedingError::DatasetRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "dataset path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(SeedDataset::from_json(&contents)?)
}
