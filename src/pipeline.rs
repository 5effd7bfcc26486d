//! Search, facet filter, sort and paginate a user list.
//!
//! [`QueryPipeline::new`] validates a decoded [`QueryState`] up front, so that
//! a bad request is rejected before any records are loaded. [`QueryPipeline::run`]
//! then applies the stages in a fixed order:
//!
//! 1. search across `name`, `username` and `email`
//! 2. facet filters
//! 3. count (becomes `totalItems`)
//! 4. sort
//! 5. paginate

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

use crate::domain::query_state::{Facet, FacetError, OrderDirection, QueryState, SortKey};
use crate::domain::types::TypeConstraintError;
use crate::domain::user::User;
use crate::pagination::Pagination;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("malformed query state: {0}")]
    MalformedQueryState(String),

    #[error("invalid pagination: {0}")]
    InvalidPagination(#[from] TypeConstraintError),
}

impl From<FacetError> for PipelineError {
    fn from(err: FacetError) -> Self {
        PipelineError::MalformedQueryState(err.to_string())
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// One page of rows plus the number of rows matching search and filters.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridPage<T> {
    pub data: Vec<T>,
    pub total_items: usize,
}

type Comparator = fn(&User, &User) -> Ordering;

/// Ascending comparator for every sortable column.
const COMPARATORS: [(SortKey, Comparator); 4] = [
    (SortKey::Id, |a, b| a.id.cmp(&b.id)),
    (SortKey::Name, |a, b| a.name.cmp(&b.name)),
    (SortKey::Username, |a, b| a.username.cmp(&b.username)),
    (SortKey::Email, |a, b| a.email.cmp(&b.email)),
];

fn comparator(key: SortKey) -> Comparator {
    COMPARATORS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, cmp)| *cmp)
        .unwrap_or(|_, _| Ordering::Equal)
}

/// Validated, ready-to-run view of a [`QueryState`].
#[derive(Debug)]
pub struct QueryPipeline {
    search: Option<String>,
    facets: Vec<Facet>,
    sort: Option<(SortKey, OrderDirection)>,
    pagination: Pagination,
}

impl QueryPipeline {
    /// Checks pagination and facet values of `state`.
    pub fn new(state: &QueryState) -> PipelineResult<Self> {
        let pagination = state.pagination()?;
        let facets = state.facets()?;

        Ok(Self {
            search: state.search_term().map(str::to_lowercase),
            facets,
            sort: state.sort_key().map(|key| (key, state.order_direction)),
            pagination,
        })
    }

    /// Runs every stage over `records`.
    pub fn run(&self, records: Vec<User>) -> GridPage<User> {
        let received = records.len();

        let records = match &self.search {
            Some(term) => search(records, term),
            None => records,
        };
        let records = self
            .facets
            .iter()
            .fold(records, |records, facet| apply_facet(records, facet));

        let total_items = records.len();

        let mut records = records;
        if let Some((key, direction)) = self.sort {
            sort(&mut records, key, direction);
        }

        let data = self.pagination.apply(records);

        log::debug!(
            "query pipeline: {received} received, {total_items} matched, {} on page {}",
            data.len(),
            self.pagination.page
        );

        GridPage { data, total_items }
    }
}

/// Validates `state` and runs the pipeline over `records`.
pub fn run(records: Vec<User>, state: &QueryState) -> PipelineResult<GridPage<User>> {
    Ok(QueryPipeline::new(state)?.run(records))
}

fn contains_term(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(term))
}

/// Keeps users whose name, username or email contains `term`.
///
/// `term` must already be lower-cased.
pub fn search(records: Vec<User>, term: &str) -> Vec<User> {
    records
        .into_iter()
        .filter(|user| {
            contains_term(user.name.as_deref(), term)
                || contains_term(user.username.as_deref(), term)
                || contains_term(user.email.as_deref(), term)
        })
        .collect()
}

/// Keeps users allowed by `facet`, preserving order.
pub fn apply_facet(records: Vec<User>, facet: &Facet) -> Vec<User> {
    match facet {
        Facet::Position(titles) => records
            .into_iter()
            .filter(|user| {
                user.title
                    .as_ref()
                    .is_some_and(|title| titles.contains(title))
            })
            .collect(),
    }
}

/// Stable ascending sort by `key`, reversed for [`OrderDirection::Desc`].
pub fn sort(records: &mut [User], key: SortKey, direction: OrderDirection) {
    records.sort_by(comparator(key));
    if direction == OrderDirection::Desc {
        records.reverse();
    }
}
