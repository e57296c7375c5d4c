use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter::{filter_records, DateBound, Filterable, FilterState};
use super::page::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE};

/// Everything a list view remembers between interactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub filter: FilterState,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    SetStartDate(String),
    SetEndDate(String),
    SetCategory(String),
    SetPaymentMethod(String),
    SetSearch(String),
    NextPage,
    PreviousPage,
    GoToPage(usize),
}

impl ListAction {
    fn changes_filter(&self) -> bool {
        !matches!(
            self,
            ListAction::NextPage | ListAction::PreviousPage | ListAction::GoToPage(_)
        )
    }
}

impl ListState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filter: FilterState::default(),
            page_index: 1,
            page_size,
        }
    }

    /// Apply one user action. `filtered_len` is the size of the filtered
    /// list *before* this action; paging clamps against it. Any filter
    /// change sends the view back to page 1.
    pub fn apply(mut self, action: ListAction, filtered_len: usize) -> Self {
        let reset = action.changes_filter();
        let pages = total_pages(filtered_len, self.page_size).max(1);

        match action {
            ListAction::SetStartDate(value) => self.filter.start_date = DateBound::parse(&value),
            ListAction::SetEndDate(value) => self.filter.end_date = DateBound::parse(&value),
            ListAction::SetCategory(value) => self.filter.category = value,
            ListAction::SetPaymentMethod(value) => self.filter.payment_method = value,
            ListAction::SetSearch(value) => self.filter.search_term = value,
            ListAction::NextPage => self.page_index = (self.page_index + 1).min(pages),
            ListAction::PreviousPage => self.page_index = self.page_index.saturating_sub(1).max(1),
            ListAction::GoToPage(index) => self.page_index = index.clamp(1, pages),
        }

        if reset {
            self.page_index = 1;
        }
        debug!(page = self.page_index, reset, "list state updated");
        self
    }

    /// Apply an action, measuring the current filtered size from `records`
    pub fn apply_to<T: Filterable>(self, records: &[T], action: ListAction) -> Self {
        let filtered_len = filter_records(records, &self.filter).len();
        self.apply(action, filtered_len)
    }

    /// Cut the current page out of an already filtered list
    pub fn view<'a, T>(&self, filtered: &'a [T]) -> Page<'a, T> {
        paginate(filtered, self.page_index, self.page_size)
    }
}
