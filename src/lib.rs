//! Example Service - CRUD for a soft-deletable "example" resource.
//!
//! Ships two interchangeable data-access implementations, one on SeaORM
//! entity queries and one on hand-written parameterized SQL, behind a
//! single repository trait.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and the listing filter
//! - **services**: Use cases over the repository trait
//! - **infra**: Database connection, migrations and repositories
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # List examples through the raw SQL store
//! cargo run -- --backend sql examples list --search foo --limit 10
//!
//! # Preview the listing statement
//! cargo run -- sql --search foo --limit 10 --offset 20
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::{Backend, Config};
pub use domain::{Example, ExampleFilter};
pub use errors::{AppError, AppResult};
pub use infra::repositories::{build_filtered_query, FilteredQuery};
