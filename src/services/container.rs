//! Service wiring - picks the data-access backend and builds services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{ExampleManager, ExampleService};
use crate::config::{Backend, Config};
use crate::infra::{ExampleRepository, ExampleSqlStore, ExampleStore};

/// Build the repository for the configured backend.
pub fn repository_for(db: DatabaseConnection, config: &Config) -> Arc<dyn ExampleRepository> {
    match config.backend {
        Backend::Orm => Arc::new(ExampleStore::new(db, config.query_timeout)),
        Backend::Sql => Arc::new(ExampleSqlStore::from_connection(db, config.query_timeout)),
    }
}

/// Application services
#[derive(Clone)]
pub struct Services {
    example_service: Arc<dyn ExampleService>,
}

impl Services {
    pub fn new(example_service: Arc<dyn ExampleService>) -> Self {
        Self { example_service }
    }

    /// Create services from a database connection and config
    pub fn from_connection(db: DatabaseConnection, config: &Config) -> Self {
        tracing::debug!("Using {:?} data-access backend", config.backend);
        let repo = repository_for(db, config);
        Self::new(Arc::new(ExampleManager::new(repo, config.actor.clone())))
    }

    pub fn examples(&self) -> Arc<dyn ExampleService> {
        self.example_service.clone()
    }
}
