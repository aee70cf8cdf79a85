//! Application services layer - Use cases and business logic.
//!
//! Services depend on the repository trait, never on a concrete store.

pub mod container;
mod example_service;

pub use container::{repository_for, Services};
pub use example_service::{ExampleManager, ExampleService};
