//! Domain layer - Core business entities and logic.
//!
//! Framework-agnostic types describing the example resource and the
//! filters a caller can apply when listing it.

mod example;
mod filter;

pub use example::{CreateExample, Example, ExampleResponse, UpdateExample};
pub use filter::{ExampleFilter, FilterField};
