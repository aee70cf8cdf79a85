//! Helpers shared by both example stores.

use std::future::Future;
use std::time::Duration;

use crate::domain::FilterField;
use crate::errors::{AppError, AppResult};

/// Run a repository operation under a deadline.
///
/// Elapsed deadlines surface as [`AppError::Timeout`], never as an empty result.
pub async fn with_deadline<T, F>(limit: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!("Database operation exceeded {:?}", limit);
            Err(AppError::Timeout(limit))
        }
    }
}

/// Parse limit/offset text into a row count.
///
/// The listing filter carries these as text; this is where they become
/// numbers before being handed to the database.
pub fn parse_count(field: FilterField, raw: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(AppError::bad_request(format!(
            "{} must be a non-negative integer, got {:?}",
            field, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(FilterField::Limit, "10").unwrap(), 10);
        assert_eq!(parse_count(FilterField::Offset, " 3 ").unwrap(), 3);
        assert!(matches!(
            parse_count(FilterField::Limit, "ten"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_count(FilterField::Offset, "-1"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_with_deadline_passes_result_through() {
        let result = with_deadline(Duration::from_secs(1), async { Ok(5) }).await;
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_with_deadline_times_out() {
        let result: AppResult<()> = with_deadline(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(AppError::Timeout(_))));
    }
}
