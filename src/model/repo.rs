//! Repository search result types.
//!
//! These mirror the JSON shape of the hosting API's
//! `GET /search/repositories` endpoint. Fields we never render are omitted;
//! serde ignores the rest of the payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

// ===== Repo =====

/// One repository search hit, displayed as one list row.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Repo {
    /// Stable numeric identifier assigned by the hosting API.
    pub id: u64,
    /// `owner/name` as displayed in the list.
    pub full_name: String,
    pub owner: RepoOwner,
    pub description: Option<String>,
    pub stargazers_count: u64,
    /// Primary language, when the API has detected one.
    pub language: Option<String>,
    pub html_url: String,
    /// Last update time; absent for some mirrored repositories.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Owning account of a repository.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepoOwner {
    pub login: String,
}

// ===== SearchPage =====

/// One page of search results as returned by the API.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchPage {
    /// Total hits for the query across all pages.
    ///
    /// The API reports the full count but only serves the first 1000
    /// results; see [`SearchPage::RESULT_CAP`].
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<Repo>,
}

impl SearchPage {
    /// Maximum number of results the search endpoint will ever serve,
    /// regardless of `total_count`.
    pub const RESULT_CAP: u64 = 1000;

    /// Number of results actually retrievable for this query.
    pub fn retrievable(&self) -> u64 {
        self.total_count.min(Self::RESULT_CAP)
    }
}
