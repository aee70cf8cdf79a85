//! Migrate command - Database migration management.

use sea_orm::DbErr;
use serde::Serialize;

use super::print_json;
use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

#[derive(Debug, Serialize)]
struct MigrationStatus {
    name: String,
    applied: bool,
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Manual control: nothing is applied on connect
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Applying pending migrations");
            db.run_migrations().await.map_err(migration_error)?;
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back the last migration");
            db.rollback_migration().await.map_err(migration_error)?;
        }
        MigrateAction::Status => {
            let status: Vec<MigrationStatus> = db
                .migration_status()
                .await
                .map_err(migration_error)?
                .into_iter()
                .map(|(name, applied)| MigrationStatus { name, applied })
                .collect();
            print_json(&status)?;
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await.map_err(migration_error)?;
        }
    }

    tracing::info!("Migration command finished");
    Ok(())
}

/// Connectivity failures keep their kind; anything else is internal.
fn migration_error(err: DbErr) -> AppError {
    match AppError::from(err) {
        AppError::Database(e) => AppError::internal(e.to_string()),
        other => other,
    }
}
