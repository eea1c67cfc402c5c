//! Application state wiring the task service to its infrastructure.
//!
//! AppState holds the concrete service instance used by both CLI and REST
//! API. The service is generic over the repository trait, but AppState pins
//! it to the SQLite implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use taskdeck_core::service::task::TaskService;
use taskdeck_infra::config::load_global_config;
use taskdeck_infra::paths::{database_url, resolve_data_dir};
use taskdeck_infra::sqlite::pool::DatabasePool;
use taskdeck_infra::sqlite::task::SqliteTaskRepository;
use taskdeck_types::config::GlobalConfig;

/// Concrete type alias for the service generic pinned to the SQLite repository.
pub type ConcreteTaskService = TaskService<SqliteTaskRepository>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub task_service: Arc<ConcreteTaskService>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state from the default data directory.
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_at(&resolve_data_dir()).await
    }

    /// Initialize the application state rooted at an explicit data directory.
    ///
    /// Connects to the database (running migrations), loads `config.toml`,
    /// and wires the task service.
    pub async fn init_at(data_dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let db_pool = DatabasePool::new(&database_url(data_dir)).await?;
        let config = load_global_config(data_dir).await;

        let task_service = TaskService::new(SqliteTaskRepository::new(db_pool.clone()));

        Ok(Self {
            task_service: Arc::new(task_service),
            config: Arc::new(config),
            data_dir: data_dir.to_path_buf(),
            db_pool,
        })
    }
}
