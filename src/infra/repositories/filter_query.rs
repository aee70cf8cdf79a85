//! Parameterized "find all" statement for the example table.
//!
//! Turns an [`ExampleFilter`] into SQL text with positional `$N`
//! placeholders and the matching ordered argument list. Absent filters
//! contribute no clause, no placeholder and no argument.

use std::fmt;

use crate::config::{EXAMPLE_COLUMNS, EXAMPLE_TABLE};
use crate::domain::{ExampleFilter, FilterField};

/// Search clause. Always bound to `$1`, which holds because search is the
/// first field in [`FilterField::ORDER`].
const SEARCH_CLAUSE: &str =
    " and (code ilike '%' || $1 || '%' or example ilike '%' || $1 || '%')";

/// Positional placeholder; position 0 means the filter is not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placeholder(usize);

impl Placeholder {
    pub const UNUSED: Placeholder = Placeholder(0);

    pub fn position(&self) -> usize {
        self.0
    }

    pub fn is_used(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Placeholder assigned to each filter for one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placeholders {
    pub search: Placeholder,
    pub limit: Placeholder,
    pub offset: Placeholder,
}

impl Placeholders {
    /// Number present filters 1..=3 in binding order; absent ones get `$0`.
    pub fn assign(filter: &ExampleFilter) -> Self {
        let mut placeholders = Placeholders::default();
        for (index, (field, _)) in filter.present().into_iter().enumerate() {
            let slot = match field {
                FilterField::Search => &mut placeholders.search,
                FilterField::Limit => &mut placeholders.limit,
                FilterField::Offset => &mut placeholders.offset,
            };
            *slot = Placeholder(index + 1);
        }
        placeholders
    }

    /// Tokens as `(search, limit, offset)`.
    pub fn tokens(&self) -> (String, String, String) {
        (
            self.search.to_string(),
            self.limit.to_string(),
            self.offset.to_string(),
        )
    }
}

/// SQL text plus the arguments its placeholders refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredQuery {
    pub sql: String,
    pub arguments: Vec<String>,
}

/// Base statement every listing starts from.
pub fn base_query() -> String {
    format!(
        "select {} from {} where deleted_at is null",
        EXAMPLE_COLUMNS, EXAMPLE_TABLE
    )
}

pub fn build_query(filter: &ExampleFilter) -> String {
    let placeholders = Placeholders::assign(filter);
    let mut sql = base_query();

    if placeholders.search.is_used() {
        sql.push_str(SEARCH_CLAUSE);
    }
    if placeholders.limit.is_used() {
        sql.push_str(&format!(" limit {}", placeholders.limit));
    }
    if placeholders.offset.is_used() {
        sql.push_str(&format!(" offset {}", placeholders.offset));
    }

    sql
}

/// Raw values of the present filters, position N holding argument `$N`.
pub fn build_arguments(filter: &ExampleFilter) -> Vec<String> {
    filter
        .present()
        .into_iter()
        .map(|(_, value)| value.to_string())
        .collect()
}

pub fn build_filtered_query(filter: &ExampleFilter) -> FilteredQuery {
    FilteredQuery {
        sql: build_query(filter),
        arguments: build_arguments(filter),
    }
}
