//! Filtering and pagination shared by every list view.
//!
//! Filtering is pure: the source slice is never touched and the result
//! borrows from it in the original order. Pagination is a slice over that
//! result. Screen state changes go through [`ListState::apply`].

mod filter;
mod page;
mod state;

pub use filter::{filter_records, DateBound, Filterable, FilterState, ALL};
pub use page::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE};
pub use state::{ListAction, ListState};
