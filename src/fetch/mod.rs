//! Network fetch side effects.
//!
//! The UI never blocks on the network: search requests are dispatched
//! fire-and-forget to a worker thread owning the blocking API client, and
//! completions come back as [`FetchOutcome`] values the event loop drains
//! on its timer tick. This is the only impure collaborator of the state
//! layer; everything it does to the view-model goes through the pure
//! transitions in [`crate::state`].
//!
//! There is no cancellation: a request, once dispatched, always produces
//! exactly one outcome. Outcomes carry their originating request so the
//! state layer can discard ones that no longer match the current query.

use crate::api::SearchBackend;
use crate::model::SearchPage;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use tracing::{debug, warn};

// ===== FetchRequest =====

/// A request for one page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Search text as typed by the user.
    pub query: String,
    /// 1-based page number.
    pub page: u32,
}

impl FetchRequest {
    /// Request the first page for a query.
    pub fn first_page(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
        }
    }
}

// ===== FetchOutcome =====

/// Completion of a [`FetchRequest`]. Sum type: a request either loads a
/// page or fails with a display message.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The request succeeded.
    Loaded {
        /// The request this page answers.
        request: FetchRequest,
        /// The decoded page of results.
        page: SearchPage,
    },
    /// The request failed; `message` is what the UI shows.
    Failed {
        /// The request that failed.
        request: FetchRequest,
        /// Human-readable failure description.
        message: String,
    },
}

impl FetchOutcome {
    /// The request that produced this outcome.
    pub fn request(&self) -> &FetchRequest {
        match self {
            FetchOutcome::Loaded { request, .. } => request,
            FetchOutcome::Failed { request, .. } => request,
        }
    }
}

// ===== FetchHandle =====

/// Handle to the fetch worker thread.
///
/// Requests go in FIFO over an mpsc channel; outcomes come back on a
/// second channel drained by [`FetchHandle::poll`]. Dropping the handle
/// closes the request channel, which ends the worker.
#[derive(Debug)]
pub struct FetchHandle {
    requests: Option<Sender<FetchRequest>>,
    outcomes: Receiver<FetchOutcome>,
    worker: Option<JoinHandle<()>>,
}

impl FetchHandle {
    /// Spawn the worker thread around a search backend.
    pub fn spawn<B: SearchBackend>(backend: B) -> Self {
        let (req_tx, req_rx) = mpsc::channel::<FetchRequest>();
        let (out_tx, out_rx) = mpsc::channel::<FetchOutcome>();

        let worker = std::thread::Builder::new()
            .name("reposcout-fetch".to_string())
            .spawn(move || run_worker(backend, req_rx, out_tx))
            .expect("failed to spawn fetch worker thread");

        Self {
            requests: Some(req_tx),
            outcomes: out_rx,
            worker: Some(worker),
        }
    }

    /// Dispatch a request to the worker. Fire-and-forget.
    pub fn dispatch(&self, request: FetchRequest) {
        debug!(query = %request.query, page = request.page, "dispatching fetch");
        if let Some(tx) = &self.requests {
            if tx.send(request).is_err() {
                warn!("fetch worker is gone; request dropped");
            }
        }
    }

    /// Drain all outcomes that have arrived since the last poll.
    /// Non-blocking; returns an empty vec when nothing is pending.
    pub fn poll(&self) -> Vec<FetchOutcome> {
        self.outcomes.try_iter().collect()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        // Closing the request channel unblocks the worker's recv loop.
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<B: SearchBackend>(
    backend: B,
    requests: Receiver<FetchRequest>,
    outcomes: Sender<FetchOutcome>,
) {
    while let Ok(request) = requests.recv() {
        let outcome = match backend.search(&request.query, request.page) {
            Ok(page) => FetchOutcome::Loaded { request, page },
            Err(err) => {
                warn!(error = %err, "search request failed");
                FetchOutcome::Failed {
                    request,
                    message: err.to_string(),
                }
            }
        };
        if outcomes.send(outcome).is_err() {
            // UI side hung up; nothing left to do.
            break;
        }
    }
}
