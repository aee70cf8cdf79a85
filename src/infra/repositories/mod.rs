//! Repository layer - Data access abstraction
//!
//! Two interchangeable implementations of [`ExampleRepository`]: one built
//! on SeaORM entity queries, one on hand-written parameterized SQL.

mod base;
pub(crate) mod entities;
mod example_repository;
mod example_sql_repository;
pub mod filter_query;

pub use base::{parse_count, with_deadline};
pub use entities::example::Model as ExampleModel;
pub use example_repository::{filtered_select, ExampleRepository, ExampleStore};
pub use example_sql_repository::{bind_filter_values, ExampleSqlStore, QueryExecutor};
pub use filter_query::{build_filtered_query, FilteredQuery, Placeholder, Placeholders};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use example_repository::MockExampleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use example_sql_repository::MockQueryExecutor;
