//! Embedded PostgreSQL wiring for the Diesel repository suites.
//!
//! Every context owns a private `pg-embed-setup-unpriv` cluster and a
//! temporary database with the crate's embedded migrations applied. The
//! cluster API is blocking, so suites stay synchronous and drive async
//! repository calls through the context's Tokio runtime.
//!
//! Set `SKIP_TEST_CLUSTER=1` to skip these suites where no cluster can start.

use std::future::Future;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

use business_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use tokio::runtime::Runtime;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// A migrated database on a private embedded cluster.
pub struct PgContext {
    runtime: Runtime,
    pool: DbPool,
    database_url: String,
    // Dropped before the cluster that hosts it.
    _database: TemporaryDatabase,
    _cluster: TestCluster,
}

impl PgContext {
    /// Connection pool for the temporary database.
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Connection URL of the temporary database.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Run `future` to completion on the context runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

fn bootstrap_dirs() -> std::io::Result<(PathBuf, PathBuf)> {
    let target = std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"),
        PathBuf::from,
    );
    let base = target
        .join("pg-embed")
        .join(format!("bootstrap-{}-{}", std::process::id(), Uuid::new_v4()));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

/// Start a cluster under the target directory unless `PG_RUNTIME_DIR` and
/// `PG_DATA_DIR` already point somewhere.
fn start_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let needs_dirs =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env = if needs_dirs {
        let (runtime_dir, data_dir) = bootstrap_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            (
                "PG_RUNTIME_DIR",
                Some(runtime_dir.to_string_lossy().into_owned()),
            ),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    TestCluster::new().map_err(|err| format!("{err:?}"))
}

fn setup() -> Result<PgContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = start_cluster()?;
    let name = format!("business_{}", Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(name.as_str())
        .map_err(|err| format!("{err:?}"))?;
    let database_url = String::from(database.url());

    runtime
        .block_on(run_pending_migrations(&database_url))
        .map_err(|err| err.to_string())?;
    let config = PoolConfig::new(database_url.as_str())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(PgContext {
        runtime,
        pool,
        database_url,
        _database: database,
        _cluster: cluster,
    })
}

fn skip_requested() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .is_ok_and(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
}

/// A fresh migrated database, or `None` when setup failed and
/// `SKIP_TEST_CLUSTER` is set.
///
/// # Panics
/// Panics when setup fails and skipping was not requested, so CI breakage is
/// not masked.
#[expect(clippy::print_stderr, reason = "skip marker for CI logs")]
pub fn migrated_database() -> Option<PgContext> {
    match setup() {
        Ok(context) => Some(context),
        Err(reason) if skip_requested() => {
            eprintln!("SKIP-TEST-CLUSTER: {reason}");
            None
        }
        Err(reason) => {
            panic!("test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.")
        }
    }
}
