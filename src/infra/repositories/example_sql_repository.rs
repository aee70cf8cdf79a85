//! Example repository over hand-written parameterized SQL.
//!
//! Statements use Postgres positional placeholders (`$1`, `$2`, ...) and are
//! handed to a [`QueryExecutor`] together with their bind values.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement, Value};
use uuid::Uuid;

use super::base::{parse_count, with_deadline};
use super::entities::example::Model as ExampleModel;
use super::example_repository::ExampleRepository;
use super::filter_query::build_filtered_query;
use crate::config::{EXAMPLE_COLUMNS, EXAMPLE_TABLE};
use crate::domain::{CreateExample, Example, ExampleFilter, FilterField, UpdateExample};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Runs a parameterized statement and maps rows onto the example model.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn query_all(&self, sql: String, values: Vec<Value>) -> Result<Vec<ExampleModel>, DbErr>;

    async fn query_one(&self, sql: String, values: Vec<Value>)
        -> Result<Option<ExampleModel>, DbErr>;
}

#[async_trait]
impl QueryExecutor for DatabaseConnection {
    async fn query_all(&self, sql: String, values: Vec<Value>) -> Result<Vec<ExampleModel>, DbErr> {
        ExampleModel::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            values,
        ))
        .all(self)
        .await
    }

    async fn query_one(
        &self,
        sql: String,
        values: Vec<Value>,
    ) -> Result<Option<ExampleModel>, DbErr> {
        ExampleModel::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            values,
        ))
        .one(self)
        .await
    }
}

/// Bind values for a filter's arguments.
///
/// Search stays text; limit and offset become `bigint` since Postgres will
/// not accept a text-typed parameter in `LIMIT`/`OFFSET`.
pub fn bind_filter_values(filter: &ExampleFilter, arguments: &[String]) -> AppResult<Vec<Value>> {
    let fields = filter.present();
    if fields.len() != arguments.len() {
        return Err(AppError::internal(format!(
            "filter has {} present fields but {} arguments",
            fields.len(),
            arguments.len()
        )));
    }

    fields
        .into_iter()
        .zip(arguments)
        .map(|((field, _), argument)| match field {
            FilterField::Search => Ok(Value::from(argument.clone())),
            FilterField::Limit | FilterField::Offset => {
                parse_count(field, argument).map(Value::from)
            }
        })
        .collect()
}

/// Raw-SQL implementation of ExampleRepository
pub struct ExampleSqlStore {
    executor: Arc<dyn QueryExecutor>,
    timeout: Duration,
}

impl ExampleSqlStore {
    pub fn new(executor: Arc<dyn QueryExecutor>, timeout: Duration) -> Self {
        Self { executor, timeout }
    }

    /// Store backed directly by a SeaORM connection.
    pub fn from_connection(db: DatabaseConnection, timeout: Duration) -> Self {
        Self::new(Arc::new(db), timeout)
    }

    async fn one(&self, sql: String, values: Vec<Value>) -> AppResult<Option<Example>> {
        tracing::debug!(%sql, args = values.len(), "sql query_one");
        with_deadline(self.timeout, async {
            let row = self.executor.query_one(sql, values).await?;
            Ok(row.map(Example::from))
        })
        .await
    }
}

#[async_trait]
impl ExampleRepository for ExampleSqlStore {
    async fn find_all(&self, filter: &ExampleFilter) -> AppResult<Vec<Example>> {
        let query = build_filtered_query(filter);
        let values = bind_filter_values(filter, &query.arguments)?;
        tracing::debug!(sql = %query.sql, args = values.len(), "sql find_all");

        with_deadline(self.timeout, async {
            let rows = self.executor.query_all(query.sql, values).await?;
            Ok(rows.into_iter().map(Example::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Example>> {
        let sql = format!(
            "select {} from {} where id = $1 and deleted_at is null",
            EXAMPLE_COLUMNS, EXAMPLE_TABLE
        );
        self.one(sql, vec![Value::from(id)]).await
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Example>> {
        let sql = format!(
            "select {} from {} where code = $1 and deleted_at is null",
            EXAMPLE_COLUMNS, EXAMPLE_TABLE
        );
        self.one(sql, vec![Value::from(code.to_string())]).await
    }

    async fn create(&self, input: CreateExample, actor: &str) -> AppResult<Example> {
        let sql = format!(
            "insert into {} (code,example,created_at,created_by,uuid) values ($1,$2,$3,$4,$5) returning {}",
            EXAMPLE_TABLE, EXAMPLE_COLUMNS
        );
        let values = vec![
            Value::from(input.code),
            Value::from(input.example),
            Value::from(Utc::now()),
            Value::from(actor.to_string()),
            Value::from(Uuid::new_v4()),
        ];
        self.one(sql, values)
            .await?
            .ok_or_else(|| AppError::internal("insert returned no row"))
    }

    async fn update(&self, id: i64, input: UpdateExample, actor: &str) -> AppResult<Example> {
        let sql = format!(
            "update {} set code = coalesce($1, code), example = coalesce($2, example), updated_at = $3, updated_by = $4 where id = $5 and deleted_at is null returning {}",
            EXAMPLE_TABLE, EXAMPLE_COLUMNS
        );
        let values = vec![
            Value::from(input.code),
            Value::from(input.example),
            Value::from(Utc::now()),
            Value::from(actor.to_string()),
            Value::from(id),
        ];
        self.one(sql, values).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i64, actor: &str) -> AppResult<()> {
        let sql = format!(
            "update {} set deleted_at = $1, deleted_by = $2 where id = $3 and deleted_at is null returning {}",
            EXAMPLE_TABLE, EXAMPLE_COLUMNS
        );
        let values = vec![
            Value::from(Utc::now()),
            Value::from(actor.to_string()),
            Value::from(id),
        ];
        self.one(sql, values).await?.ok_or_not_found()?;
        Ok(())
    }

    async fn restore(&self, id: i64, actor: &str) -> AppResult<Example> {
        let sql = format!(
            "update {} set deleted_at = null, deleted_by = null, updated_at = $1, updated_by = $2 where id = $3 and deleted_at is not null returning {}",
            EXAMPLE_TABLE, EXAMPLE_COLUMNS
        );
        let values = vec![
            Value::from(Utc::now()),
            Value::from(actor.to_string()),
            Value::from(id),
        ];
        self.one(sql, values)
            .await?
            .ok_or_else(|| AppError::validation("Example is not deleted or does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_values_convert_counts() {
        let filter = ExampleFilter::new("test", "10", "20");
        let query = build_filtered_query(&filter);
        let values = bind_filter_values(&filter, &query.arguments).unwrap();
        assert_eq!(
            values,
            vec![
                Value::from("test".to_string()),
                Value::from(10i64),
                Value::from(20i64),
            ]
        );
    }

    #[test]
    fn test_bind_values_reject_non_numeric_offset() {
        let filter = ExampleFilter::new("", "", "later");
        let query = build_filtered_query(&filter);
        let result = bind_filter_values(&filter, &query.arguments);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_bind_values_detect_argument_mismatch() {
        let filter = ExampleFilter::new("test", "", "");
        let result = bind_filter_values(&filter, &[]);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
