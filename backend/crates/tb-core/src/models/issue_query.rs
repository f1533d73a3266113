use crate::{IssueSortKey, Result as CoreErrorResult, SortOrder};

use std::str::FromStr;

/// Validated list-view query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    /// Substring matched against the stored label string
    pub label: Option<String>,
    pub sort: IssueSortKey,
    pub order: SortOrder,
}

impl IssueQuery {
    /// Parse raw query-string values. Blank values fall back to defaults,
    /// unknown sort keys or orders are rejected.
    #[track_caller]
    pub fn parse(
        label: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> CoreErrorResult<Self> {
        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from);

        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => IssueSortKey::from_str(s)?,
            None => IssueSortKey::default(),
        };

        let order = match order.map(str::trim).filter(|o| !o.is_empty()) {
            Some(o) => SortOrder::from_str(o)?,
            None => SortOrder::default(),
        };

        Ok(Self { label, sort, order })
    }
}
