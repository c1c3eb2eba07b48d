//! Search API access.
//!
//! [`SearchClient`] is the concrete `reqwest`-backed client;
//! [`SearchBackend`] is the seam the fetch worker is written against, so
//! state and plumbing tests can substitute a stub.

pub mod backend;
pub mod client;

pub use backend::SearchBackend;
pub use client::SearchClient;
