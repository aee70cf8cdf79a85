//! Example repository: trait plus the SeaORM-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QuerySelect, Select, Set,
};
use uuid::Uuid;

use super::base::{parse_count, with_deadline};
use super::entities::example::{self, ActiveModel, Entity as ExampleEntity};
use crate::domain::{CreateExample, Example, ExampleFilter, FilterField, UpdateExample};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Example repository trait for dependency injection.
///
/// Query methods exclude soft-deleted records unless stated otherwise.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// List active examples matching the filter
    async fn find_all(&self, filter: &ExampleFilter) -> AppResult<Vec<Example>>;

    /// Find active example by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Example>>;

    /// Find active example by code
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Example>>;

    /// Create a new example
    async fn create(&self, input: CreateExample, actor: &str) -> AppResult<Example>;

    /// Update fields of an active example
    async fn update(&self, id: i64, input: UpdateExample, actor: &str) -> AppResult<Example>;

    /// Soft delete example by ID (sets deleted_at and deleted_by)
    async fn delete(&self, id: i64, actor: &str) -> AppResult<()>;

    /// Restore a soft-deleted example
    async fn restore(&self, id: i64, actor: &str) -> AppResult<Example>;
}

/// Build the SeaORM select for a listing filter.
///
/// Same semantics as the raw statement: case-insensitive substring match on
/// code or example, then limit, then offset.
pub fn filtered_select(filter: &ExampleFilter) -> AppResult<Select<ExampleEntity>> {
    let mut query = ExampleEntity::find().filter(example::Column::DeletedAt.is_null());

    if let Some(search) = filter.value(FilterField::Search) {
        let pattern = format!("%{}%", search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(example::Column::Code).ilike(pattern.clone()))
                .add(Expr::col(example::Column::Example).ilike(pattern)),
        );
    }
    if let Some(limit) = filter.value(FilterField::Limit) {
        query = query.limit(parse_count(FilterField::Limit, limit)? as u64);
    }
    if let Some(offset) = filter.value(FilterField::Offset) {
        query = query.offset(parse_count(FilterField::Offset, offset)? as u64);
    }

    Ok(query)
}

/// SeaORM implementation of ExampleRepository with soft delete
pub struct ExampleStore {
    db: DatabaseConnection,
    timeout: Duration,
}

impl ExampleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    async fn find_active(&self, id: i64) -> AppResult<Option<example::Model>> {
        ExampleEntity::find_by_id(id)
            .filter(example::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl ExampleRepository for ExampleStore {
    async fn find_all(&self, filter: &ExampleFilter) -> AppResult<Vec<Example>> {
        let query = filtered_select(filter)?;
        with_deadline(self.timeout, async {
            let models = query.all(&self.db).await?;
            tracing::debug!("orm find_all returned {} rows", models.len());
            Ok(models.into_iter().map(Example::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Example>> {
        with_deadline(self.timeout, async {
            Ok(self.find_active(id).await?.map(Example::from))
        })
        .await
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Example>> {
        with_deadline(self.timeout, async {
            let result = ExampleEntity::find()
                .filter(example::Column::Code.eq(code))
                .filter(example::Column::DeletedAt.is_null())
                .one(&self.db)
                .await?;
            Ok(result.map(Example::from))
        })
        .await
    }

    async fn create(&self, input: CreateExample, actor: &str) -> AppResult<Example> {
        let active_model = ActiveModel {
            id: NotSet,
            code: Set(input.code),
            example: Set(input.example),
            created_at: Set(Utc::now()),
            created_by: Set(actor.to_string()),
            updated_at: Set(None),
            updated_by: Set(None),
            deleted_at: Set(None),
            deleted_by: Set(None),
            uuid: Set(Uuid::new_v4()),
        };

        with_deadline(self.timeout, async {
            let model = active_model.insert(&self.db).await?;
            Ok(Example::from(model))
        })
        .await
    }

    async fn update(&self, id: i64, input: UpdateExample, actor: &str) -> AppResult<Example> {
        with_deadline(self.timeout, async {
            let existing = self.find_active(id).await?.ok_or_not_found()?;

            let mut active: ActiveModel = existing.into();
            if let Some(code) = input.code {
                active.code = Set(code);
            }
            if let Some(text) = input.example {
                active.example = Set(text);
            }
            active.updated_at = Set(Some(Utc::now()));
            active.updated_by = Set(Some(actor.to_string()));

            let model = active.update(&self.db).await?;
            Ok(Example::from(model))
        })
        .await
    }

    async fn delete(&self, id: i64, actor: &str) -> AppResult<()> {
        with_deadline(self.timeout, async {
            let existing = self.find_active(id).await?.ok_or_not_found()?;

            let mut active: ActiveModel = existing.into();
            active.deleted_at = Set(Some(Utc::now()));
            active.deleted_by = Set(Some(actor.to_string()));

            active.update(&self.db).await?;
            Ok(())
        })
        .await
    }

    async fn restore(&self, id: i64, actor: &str) -> AppResult<Example> {
        with_deadline(self.timeout, async {
            let existing = ExampleEntity::find_by_id(id)
                .filter(example::Column::DeletedAt.is_not_null())
                .one(&self.db)
                .await?
                .ok_or_else(|| AppError::validation("Example is not deleted or does not exist"))?;

            let mut active: ActiveModel = existing.into();
            active.deleted_at = Set(None);
            active.deleted_by = Set(None);
            active.updated_at = Set(Some(Utc::now()));
            active.updated_by = Set(Some(actor.to_string()));

            let model = active.update(&self.db).await?;
            Ok(Example::from(model))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn render(filter: &ExampleFilter) -> String {
        filtered_select(filter)
            .unwrap()
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_select_without_filters_only_excludes_deleted() {
        let sql = render(&ExampleFilter::default());
        assert!(sql.contains(r#""deleted_at" IS NULL"#));
        assert!(!sql.contains("ILIKE"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn test_select_with_all_filters() {
        let sql = render(&ExampleFilter::new("test", "10", "20"));
        assert!(sql.contains(r#""code" ILIKE '%test%'"#));
        assert!(sql.contains(r#""example" ILIKE '%test%'"#));
        assert!(sql.contains(" OR "));
        assert!(sql.contains("LIMIT 10"));
        assert!(sql.contains("OFFSET 20"));
    }

    #[test]
    fn test_select_treats_zero_limit_as_absent() {
        let sql = render(&ExampleFilter::new("", "0", "5"));
        assert!(!sql.contains("LIMIT"));
        assert!(sql.contains("OFFSET 5"));
    }

    #[test]
    fn test_select_rejects_non_numeric_limit() {
        let result = filtered_select(&ExampleFilter::new("", "ten", ""));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
