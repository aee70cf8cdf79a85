//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::config::Backend;
use crate::domain::ExampleFilter;

/// Example service - manage the example resource from the command line
#[derive(Parser, Debug)]
#[command(name = "example-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data-access backend
    #[arg(short, long, global = true, value_enum, ignore_case = true, env = "DATABASE_BACKEND")]
    pub backend: Option<Backend>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage example records
    Examples(ExamplesArgs),

    /// Print the listing statement and its arguments without connecting
    Sql(FilterArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the examples command
#[derive(Parser, Debug)]
pub struct ExamplesArgs {
    #[command(subcommand)]
    pub action: ExamplesAction,
}

/// Listing filters, passed through as text
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring to match against code or example
    #[arg(short, long)]
    pub search: Option<String>,

    /// Maximum rows to return (empty or 0 = no limit)
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Rows to skip (empty or 0 = none)
    #[arg(short, long)]
    pub offset: Option<String>,
}

impl From<FilterArgs> for ExampleFilter {
    fn from(args: FilterArgs) -> Self {
        ExampleFilter {
            search: args.search,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

/// Example record actions
#[derive(Subcommand, Debug)]
pub enum ExamplesAction {
    /// List active examples
    List(FilterArgs),
    /// Show one example
    Get {
        id: i64,
    },
    /// Create an example
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        example: String,
    },
    /// Update an example
    Update {
        id: i64,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        example: Option<String>,
    },
    /// Soft delete an example
    Delete {
        id: i64,
    },
    /// Restore a soft-deleted example
    Restore {
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::parse_from([
            "example-service",
            "--backend",
            "orm",
            "examples",
            "list",
            "--search",
            "abc",
            "--limit",
            "10",
        ]);
        assert_eq!(cli.backend, Some(Backend::Orm));
        match cli.command {
            Commands::Examples(ExamplesArgs {
                action: ExamplesAction::List(filter),
            }) => {
                let filter = ExampleFilter::from(filter);
                assert_eq!(filter.search.as_deref(), Some("abc"));
                assert_eq!(filter.limit.as_deref(), Some("10"));
                assert_eq!(filter.offset, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_backend_falls_back_to_environment() {
        let command = Cli::command();
        let backend = command
            .get_arguments()
            .find(|arg| arg.get_id() == "backend")
            .unwrap();
        assert_eq!(
            backend.get_env(),
            Some(std::ffi::OsStr::new("DATABASE_BACKEND"))
        );
    }

    #[test]
    fn test_parse_sql_preview() {
        let cli = Cli::parse_from(["example-service", "sql", "-l", "5", "-o", "0"]);
        assert!(matches!(cli.command, Commands::Sql(_)));
    }
}
