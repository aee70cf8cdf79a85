//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `examples` - Example record management
//! - `sql` - Listing statement preview

pub mod args;

pub use args::{Cli, Commands};
