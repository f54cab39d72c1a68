/// Launch list state and pagination bookkeeping
use crate::clients::LaunchSource;
use crate::domain::{Launch, Pagination, SortDirection};
use std::collections::HashSet;
use tracing::error;

/// UI-facing state for the paginated launch table.
///
/// The record set and pagination metadata always change together, from a
/// single response. Per-row UI state (expanded link panels, highlight) is
/// local and transient; it survives page and sort changes and is only touched
/// by the explicit toggle operations.
pub struct LaunchListController<S> {
    source: S,
    launches: Vec<Launch>,
    pagination: Pagination,
    sort: Option<SortDirection>,
    expanded: HashSet<String>,
    highlighted: Option<String>,
}

impl<S> LaunchListController<S> {
    pub fn new(source: S, page_limit: i64) -> Self {
        Self {
            source,
            launches: Vec::new(),
            pagination: Pagination::initial(page_limit),
            sort: None,
            expanded: HashSet::new(),
            highlighted: None,
        }
    }

    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn sort(&self) -> Option<SortDirection> {
        self.sort
    }

    pub fn is_expanded(&self, launch_id: &str) -> bool {
        self.expanded.contains(launch_id)
    }

    pub fn is_highlighted(&self, launch_id: &str) -> bool {
        self.highlighted.as_deref() == Some(launch_id)
    }

    /// Show or hide the link panel for one row.
    pub fn toggle_links(&mut self, launch_id: &str) {
        if !self.expanded.remove(launch_id) {
            self.expanded.insert(launch_id.to_string());
        }
    }

    /// Highlight a row, or clear the highlight when it is already on that row.
    pub fn toggle_row(&mut self, launch_id: &str) {
        if self.highlighted.as_deref() == Some(launch_id) {
            self.highlighted = None;
        } else {
            self.highlighted = Some(launch_id.to_string());
        }
    }

    /// Ordinal of the first record shown on the current page (1-based).
    pub fn start_index(&self) -> i64 {
        (self.pagination.page - 1) * self.pagination.limit + 1
    }

    /// Ordinal of the last record shown on the current page.
    pub fn end_index(&self) -> i64 {
        (self.pagination.page * self.pagination.limit).min(self.pagination.total_docs)
    }
}

impl<S: LaunchSource> LaunchListController<S> {
    /// Load the first page under the server's default ordering.
    pub async fn initialize(&mut self) {
        self.refresh(1).await;
    }

    /// Sort by launch date, oldest first, starting back at page 1.
    pub async fn sort_ascending(&mut self) {
        self.sort = Some(SortDirection::Ascending);
        self.refresh(1).await;
    }

    /// Sort by launch date, newest first, starting back at page 1.
    pub async fn sort_descending(&mut self) {
        self.sort = Some(SortDirection::Descending);
        self.refresh(1).await;
    }

    pub async fn previous_page(&mut self) {
        if self.pagination.has_prev_page {
            self.refresh(self.pagination.page - 1).await;
        }
    }

    pub async fn next_page(&mut self) {
        if self.pagination.has_next_page {
            self.refresh(self.pagination.page + 1).await;
        }
    }

    /// Re-query and replace records plus pagination metadata together.
    ///
    /// On failure the previously displayed state is kept untouched and the
    /// error is logged at this boundary rather than propagated.
    async fn refresh(&mut self, page: i64) {
        match self
            .source
            .query_launches(page, self.pagination.limit, self.sort)
            .await
        {
            Ok(response) => {
                self.launches = response.docs;
                self.pagination = response.pagination;
            }
            Err(e) => {
                error!("launch query error: {:?}", e);
            }
        }
    }
}
