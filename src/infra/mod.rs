//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and the example repositories.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{ExampleRepository, ExampleSqlStore, ExampleStore, QueryExecutor};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockExampleRepository, MockQueryExecutor};
