//! Trait seam between the fetch worker and the search API.

use crate::model::{ApiError, SearchPage};

/// Abstraction over the repository search API.
///
/// The fetch worker is generic over this trait; production code uses
/// [`crate::api::SearchClient`], tests use hand-written stubs.
pub trait SearchBackend: Send + 'static {
    /// Fetch one page of repositories matching `query`.
    ///
    /// Page numbers are 1-based, matching the API's `page` parameter.
    fn search(&self, query: &str, page: u32) -> Result<SearchPage, ApiError>;
}
