//! Listing filter for the example resource.

use serde::{Deserialize, Serialize};

use crate::config::ZERO_FILTER_VALUE;

/// Optional filters supplied by a caller listing examples.
///
/// Values are kept as the caller's raw text. `limit` and `offset` are not
/// parsed here; an empty string or a literal `"0"` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// The individual filters, in the order they bind to placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Limit,
    Offset,
}

impl FilterField {
    /// Binding order. Search must stay first: its clause text is bound to `$1`.
    pub const ORDER: [FilterField; 3] = [FilterField::Search, FilterField::Limit, FilterField::Offset];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::Limit => "limit",
            FilterField::Offset => "offset",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExampleFilter {
    pub fn new(
        search: impl Into<String>,
        limit: impl Into<String>,
        offset: impl Into<String>,
    ) -> Self {
        Self {
            search: Some(search.into()),
            limit: Some(limit.into()),
            offset: Some(offset.into()),
        }
    }

    /// Raw value of a field if it counts as present.
    pub fn value(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Search => self.search.as_deref().filter(|s| !s.is_empty()),
            FilterField::Limit => present_count(self.limit.as_deref()),
            FilterField::Offset => present_count(self.offset.as_deref()),
        }
    }

    /// Present fields with their raw values, in binding order.
    pub fn present(&self) -> Vec<(FilterField, &str)> {
        FilterField::ORDER
            .iter()
            .filter_map(|field| self.value(*field).map(|v| (*field, v)))
            .collect()
    }
}

fn present_count(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty() && *v != ZERO_FILTER_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_zero_are_absent() {
        let filter = ExampleFilter::new("", "0", "");
        assert!(filter.present().is_empty());
    }

    #[test]
    fn test_zero_search_is_present() {
        let filter = ExampleFilter::new("0", "", "");
        assert_eq!(filter.present(), vec![(FilterField::Search, "0")]);
    }

    #[test]
    fn test_present_keeps_binding_order() {
        let filter = ExampleFilter {
            search: None,
            limit: Some("5".to_string()),
            offset: Some("15".to_string()),
        };
        assert_eq!(
            filter.present(),
            vec![(FilterField::Limit, "5"), (FilterField::Offset, "15")]
        );
    }

    #[test]
    fn test_non_numeric_values_pass_through() {
        let filter = ExampleFilter::new("", "ten", "00");
        assert_eq!(filter.value(FilterField::Limit), Some("ten"));
        assert_eq!(filter.value(FilterField::Offset), Some("00"));
    }
}
