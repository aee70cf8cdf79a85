//! Example service - Use cases for the example resource.
//!
//! A thin layer over [`ExampleRepository`]: input validation, duplicate code
//! checks and audit actor stamping.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{CreateExample, Example, ExampleFilter, UpdateExample};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ExampleRepository;

/// Example service trait for dependency injection.
#[async_trait]
pub trait ExampleService: Send + Sync {
    /// List active examples matching the filter
    async fn list_examples(&self, filter: ExampleFilter) -> AppResult<Vec<Example>>;

    /// Get active example by ID
    async fn get_example(&self, id: i64) -> AppResult<Example>;

    /// Create a new example with a unique code
    async fn create_example(&self, input: CreateExample) -> AppResult<Example>;

    /// Update an active example
    async fn update_example(&self, id: i64, input: UpdateExample) -> AppResult<Example>;

    /// Soft delete an example
    async fn delete_example(&self, id: i64) -> AppResult<()>;

    /// Restore a soft-deleted example
    async fn restore_example(&self, id: i64) -> AppResult<Example>;
}

/// Concrete implementation of ExampleService.
pub struct ExampleManager {
    repo: Arc<dyn ExampleRepository>,
    actor: String,
}

impl ExampleManager {
    /// `actor` is recorded in the audit columns of every write.
    pub fn new(repo: Arc<dyn ExampleRepository>, actor: impl Into<String>) -> Self {
        Self {
            repo,
            actor: actor.into(),
        }
    }

    async fn ensure_code_free(&self, code: &str, except: Option<i64>) -> AppResult<()> {
        match self.repo.find_by_code(code).await? {
            Some(existing) if Some(existing.id) != except => {
                Err(AppError::conflict(format!("Example with code {}", code)))
            }
            _ => Ok(()),
        }
    }
}

/// Format validation errors into a single message
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[async_trait]
impl ExampleService for ExampleManager {
    async fn list_examples(&self, filter: ExampleFilter) -> AppResult<Vec<Example>> {
        self.repo.find_all(&filter).await
    }

    async fn get_example(&self, id: i64) -> AppResult<Example> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_example(&self, input: CreateExample) -> AppResult<Example> {
        input
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
        self.ensure_code_free(&input.code, None).await?;

        let example = self.repo.create(input, &self.actor).await?;
        tracing::info!(id = example.id, code = %example.code, "example created");
        Ok(example)
    }

    async fn update_example(&self, id: i64, input: UpdateExample) -> AppResult<Example> {
        if input.is_empty() {
            return Err(AppError::validation("Nothing to update"));
        }
        input
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
        if let Some(code) = input.code.as_deref() {
            self.ensure_code_free(code, Some(id)).await?;
        }

        self.repo.update(id, input, &self.actor).await
    }

    async fn delete_example(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id, &self.actor).await?;
        tracing::info!(id, "example deleted");
        Ok(())
    }

    async fn restore_example(&self, id: i64) -> AppResult<Example> {
        self.repo.restore(id, &self.actor).await
    }
}
