//! Decoded grid view request.
//!
//! A [`QueryState`] is what the grid emits on every search input, filter
//! change, sort click and page change. It travels as an opaque token (see
//! [`crate::token`]) and is decoded into these types before the pipeline runs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::domain::types::{PageNumber, PageSize, TypeConstraintError};
use crate::pagination::Pagination;

/// Name of the filter entry restricting users to a set of positions.
pub const POSITION_FILTER: &str = "PositionFilter";

/// Current grid view request: search text, filters, sort and page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub filters: Vec<FilterEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default)]
    pub order_direction: OrderDirection,
    /// One-based page number. Kept raw so that a non-positive value is
    /// reported as a pagination error instead of a decode error.
    pub page: i64,
    pub page_size: i64,
}

impl QueryState {
    /// Creates a state for the given page with no search, filters or sort.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            order_by: None,
            order_direction: OrderDirection::Asc,
            page,
            page_size,
        }
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn filter(mut self, entry: FilterEntry) -> Self {
        self.filters.push(entry);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some(column.into());
        self.order_direction = direction;
        self
    }

    /// Search text, or `None` when the search stage should be skipped.
    pub fn search_term(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Resolved sort column, or `None` when absent or unsupported.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.order_by.as_deref().and_then(SortKey::parse)
    }

    /// Validated page number and size.
    pub fn pagination(&self) -> Result<Pagination, TypeConstraintError> {
        Ok(Pagination::new(
            PageNumber::new(self.page)?,
            PageSize::new(self.page_size)?,
        ))
    }

    /// Facets recognised among the filter entries, in entry order.
    ///
    /// Entries with an unknown name are skipped.
    pub fn facets(&self) -> Result<Vec<Facet>, FacetError> {
        self.filters
            .iter()
            .filter_map(|entry| entry.facet().transpose())
            .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FilterEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FilterEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sort direction. Anything other than `"desc"` sorts ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

impl Serialize for OrderDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("desc") => OrderDirection::Desc,
            _ => OrderDirection::Asc,
        })
    }
}

/// Columns the grid can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Username,
    Email,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Username,
        SortKey::Email,
    ];

    /// Matches a column name case-insensitively.
    pub fn parse(column: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.column().eq_ignore_ascii_case(column))
    }

    pub fn column(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Username => "username",
            SortKey::Email => "email",
        }
    }
}

/// One named filter entry as sent by the grid.
///
/// `value` is usually a JSON document serialized into a string, but a raw
/// JSON value is accepted as well.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FilterEntry {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl FilterEntry {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Builds a position filter with the value serialized the way the grid does.
    pub fn positions<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<Value> = titles
            .into_iter()
            .map(|t| Value::String(t.into()))
            .collect();
        Self::new(POSITION_FILTER, Value::Array(titles).to_string())
    }

    /// Interprets this entry, returning `None` for names with no facet behind them.
    pub fn facet(&self) -> Result<Option<Facet>, FacetError> {
        match self.name.as_str() {
            POSITION_FILTER => self
                .string_list()
                .map(|titles| Some(Facet::Position(titles))),
            _ => Ok(None),
        }
    }

    fn string_list(&self) -> Result<Vec<String>, FacetError> {
        let parsed = match &self.value {
            Value::String(serialized) => serde_json::from_str(serialized),
            other => serde_json::from_value(other.clone()),
        };
        parsed.map_err(|err| FacetError::InvalidValue {
            name: self.name.clone(),
            reason: err.to_string(),
        })
    }
}

/// A filter restricting one field to a set of allowed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Facet {
    /// Keep users whose `title` is one of the listed positions.
    Position(Vec<String>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetError {
    #[error("filter `{name}` has an invalid value: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_grid_payload() {
        let state: QueryState = serde_json::from_value(json!({
            "query": "ann",
            "filters": [{"name": "PositionFilter", "value": "[\"A\",\"C\"]"}],
            "orderBy": "Name",
            "orderDirection": "desc",
            "page": 2,
            "pageSize": 10
        }))
        .unwrap();

        assert_eq!(state.search_term(), Some("ann"));
        assert_eq!(state.sort_key(), Some(SortKey::Name));
        assert_eq!(state.order_direction, OrderDirection::Desc);
        assert_eq!(
            state.facets().unwrap(),
            vec![Facet::Position(vec!["A".into(), "C".into()])]
        );
    }

    #[test]
    fn nulls_fall_back_to_defaults() {
        let state: QueryState = serde_json::from_value(json!({
            "query": null,
            "filters": null,
            "orderBy": null,
            "orderDirection": null,
            "page": 1,
            "pageSize": 5
        }))
        .unwrap();

        assert_eq!(state, QueryState::new(1, 5));
    }

    #[test]
    fn unknown_direction_sorts_ascending() {
        let state: QueryState = serde_json::from_value(json!({
            "orderDirection": "DESC",
            "page": 1,
            "pageSize": 5
        }))
        .unwrap();

        assert_eq!(state.order_direction, OrderDirection::Asc);
    }

    #[test]
    fn empty_query_skips_search() {
        assert_eq!(QueryState::new(1, 5).search("").search_term(), None);
    }

    #[test]
    fn sort_key_is_case_insensitive_and_rejects_unknown_columns() {
        assert_eq!(SortKey::parse("ID"), Some(SortKey::Id));
        assert_eq!(SortKey::parse("userName"), Some(SortKey::Username));
        assert_eq!(SortKey::parse("title"), None);
    }

    #[test]
    fn unknown_filters_are_inert() {
        let state = QueryState::new(1, 5).filter(FilterEntry::new("StatusFilter", "whatever"));

        assert!(state.facets().unwrap().is_empty());
    }

    #[test]
    fn position_filter_accepts_raw_array() {
        let entry = FilterEntry::new(POSITION_FILTER, json!(["Manager"]));

        assert_eq!(
            entry.facet().unwrap(),
            Some(Facet::Position(vec!["Manager".into()]))
        );
    }

    #[test]
    fn position_filter_rejects_garbage() {
        let entry = FilterEntry::new(POSITION_FILTER, "not a list");

        assert!(matches!(
            entry.facet(),
            Err(FacetError::InvalidValue { name, .. }) if name == POSITION_FILTER
        ));
    }

    #[test]
    fn positions_builder_serializes_value_as_string() {
        let entry = FilterEntry::positions(["A", "C"]);

        assert_eq!(entry.value, Value::String(r#"["A","C"]"#.to_string()));
    }

    #[test]
    fn pagination_rejects_non_positive_values() {
        assert_eq!(
            QueryState::new(0, 5).pagination(),
            Err(TypeConstraintError::NonPositivePage(0))
        );
        assert_eq!(
            QueryState::new(1, -1).pagination(),
            Err(TypeConstraintError::NonPositivePageSize(-1))
        );
    }
}
