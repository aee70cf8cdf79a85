//! Sql command - Show the listing statement for a set of filters.

use serde::Serialize;

use super::print_json;
use crate::cli::args::FilterArgs;
use crate::domain::ExampleFilter;
use crate::errors::AppResult;
use crate::infra::repositories::{build_filtered_query, Placeholders};

#[derive(Debug, Serialize)]
struct Preview {
    sql: String,
    arguments: Vec<String>,
    placeholders: PlaceholderTokens,
}

#[derive(Debug, Serialize)]
struct PlaceholderTokens {
    search: String,
    limit: String,
    offset: String,
}

/// Execute the sql command (no database connection needed)
pub fn execute(args: FilterArgs) -> AppResult<()> {
    let filter = ExampleFilter::from(args);
    let (search, limit, offset) = Placeholders::assign(&filter).tokens();
    let query = build_filtered_query(&filter);

    print_json(&Preview {
        sql: query.sql,
        arguments: query.arguments,
        placeholders: PlaceholderTokens {
            search,
            limit,
            offset,
        },
    })
}
