//! Example Service - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use example_service::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Verbose mode sets debug level
    init_tracing(cli.verbose);

    let config = Config::from_env().with_backend(cli.backend);
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::Examples(args) => commands::examples::execute(args, config).await,
        Commands::Sql(args) => commands::sql::execute(args),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        if let Ok(body) = serde_json::to_string(&e.to_response()) {
            eprintln!("{}", body);
        }
        std::process::exit(e.exit_code());
    }
}

/// Initialize tracing subscriber (logs go to stderr, stdout carries JSON output)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
