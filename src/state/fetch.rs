//! Filter and fetch lifecycle types.
//!
//! This module contains the canonical fetch intent the controller dispatches
//! and the states a job list request moves through.

use crate::api::PageResult;

/// Message shown for every failed list query, whatever the cause.
///
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch jobs. Please try again later.";

/// Specifying what an active filter narrows by.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FilterKind {
    Category,
    Company,
}

impl FilterKind {
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Category => "category",
            FilterKind::Company => "company",
        }
    }
}

/// The active job list narrowing criterion. At most one filter applies at a
/// time.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum FilterSpec {
    #[default]
    NoFilter,
    Active { kind: FilterKind, value: String },
}

impl FilterSpec {
    /// Returns the value sent to the API, if a filter is active.
    ///
    pub fn value(&self) -> Option<&str> {
        match self {
            FilterSpec::NoFilter => None,
            FilterSpec::Active { value, .. } => Some(value),
        }
    }

    /// Returns true when the filter selects the given category.
    ///
    pub fn is_category(&self, category: &str) -> bool {
        matches!(
            self,
            FilterSpec::Active { kind: FilterKind::Category, value } if value == category
        )
    }
}

/// Lifecycle of the current job list request.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready(PageResult),
    Failed(String),
}

impl FetchState {
    /// Returns the result when the last request succeeded.
    ///
    pub fn ready(&self) -> Option<&PageResult> {
        match self {
            FetchState::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }
}

/// One list query, tagged with the sequence number of the fetch cycle that
/// issued it.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct JobsRequest {
    pub sequence: u64,
    pub page: u32,
    pub size: u32,
    pub filter: FilterSpec,
}

/// Specifying what the job list area shows.
///
#[derive(Debug, PartialEq, Eq)]
pub enum JobListView<'a> {
    Loading,
    Failed(&'static str),
    NoResults,
    Jobs {
        result: &'a PageResult,
        pagination: Option<Vec<u32>>,
    },
}

impl<'a> JobListView<'a> {
    /// Derive the job list view from the fetch state.
    ///
    pub fn from_fetch_state(fetch_state: &'a FetchState) -> Self {
        match fetch_state {
            FetchState::Idle | FetchState::Loading => JobListView::Loading,
            FetchState::Failed(_) => JobListView::Failed(FETCH_FAILED_MESSAGE),
            FetchState::Ready(result) if result.items.is_empty() => JobListView::NoResults,
            FetchState::Ready(result) => JobListView::Jobs {
                result,
                pagination: pagination_targets(result.pages),
            },
        }
    }
}

/// Returns the page numbers a pagination control may offer, or None when
/// there is a single page or fewer.
///
pub fn pagination_targets(pages: u32) -> Option<Vec<u32>> {
    if pages <= 1 {
        None
    } else {
        Some((1..=pages).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::JobPosting;
    use fake::{Fake, Faker};

    #[test]
    fn filter_value() {
        assert_eq!(FilterSpec::NoFilter.value(), None);
        let filter = FilterSpec::Active {
            kind: FilterKind::Company,
            value: "Acme".to_string(),
        };
        assert_eq!(filter.value(), Some("Acme"));
        assert!(!filter.is_category("Acme"));

        let filter = FilterSpec::Active {
            kind: FilterKind::Category,
            value: "Product".to_string(),
        };
        assert!(filter.is_category("Product"));
        assert!(!filter.is_category("Programming"));
    }

    #[test]
    fn pagination_bounds() {
        assert_eq!(pagination_targets(0), None);
        assert_eq!(pagination_targets(1), None);
        let targets = pagination_targets(4).unwrap();
        assert_eq!(targets, vec![1, 2, 3, 4]);
        assert!(!targets.contains(&0));
        assert!(!targets.contains(&5));
    }

    #[test]
    fn empty_result_shows_no_results_without_pagination() {
        let state = FetchState::Ready(PageResult {
            items: vec![],
            total: 0,
            pages: 3,
        });
        assert_eq!(JobListView::from_fetch_state(&state), JobListView::NoResults);
    }

    #[test]
    fn single_page_has_no_pagination() {
        let jobs: [JobPosting; 2] = Faker.fake();
        let state = FetchState::Ready(PageResult {
            items: jobs.to_vec(),
            total: 2,
            pages: 1,
        });
        match JobListView::from_fetch_state(&state) {
            JobListView::Jobs { result, pagination } => {
                assert_eq!(result.items.len(), 2);
                assert_eq!(pagination, None);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn failed_and_loading_views() {
        assert_eq!(
            JobListView::from_fetch_state(&FetchState::Failed("boom".to_string())),
            JobListView::Failed(FETCH_FAILED_MESSAGE)
        );
        assert_eq!(
            JobListView::from_fetch_state(&FetchState::Loading),
            JobListView::Loading
        );
        assert_eq!(
            JobListView::from_fetch_state(&FetchState::Idle),
            JobListView::Loading
        );
    }
}
