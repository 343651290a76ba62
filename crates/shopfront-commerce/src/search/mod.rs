//! Search module.
//!
//! Contains the title filter, the search state, and pagination.

mod filter;
mod paginator;
mod query;
mod results;

pub use filter::filter_catalog;
pub use paginator::{paginate, total_pages, PageState};
pub use query::SearchQuery;
pub use results::{Pagination, SearchResults};
