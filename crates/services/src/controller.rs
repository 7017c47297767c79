use std::cell::RefCell;
use std::sync::Arc;
use std::time::Instant;

use analyzer_core::model::SuggestedQuery;
use analyzer_core::{RequestTicket, SessionEvent, SessionState, ValidationError};

use crate::client::AnalyzerApi;
use crate::upload::FileUpload;

/// Where the controller reads and writes session snapshots.
///
/// The UI backs this with a reactive signal; tests use [`LocalSession`].
pub trait SessionStore {
    fn snapshot(&self) -> SessionState;
    fn replace(&self, next: SessionState);
}

/// A plain in-memory store for a single event loop.
#[derive(Debug, Default)]
pub struct LocalSession {
    state: RefCell<SessionState>,
}

impl LocalSession {
    #[must_use]
    pub fn new(state: SessionState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }
}

impl SessionStore for LocalSession {
    fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn replace(&self, next: SessionState) {
        *self.state.borrow_mut() = next;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend answered and the session now shows its data.
    Completed,
    /// The request failed; the session shows an error.
    Failed,
    /// Rejected before any network call.
    Rejected(ValidationError),
    /// A newer request of the same kind was started; this response was dropped.
    Superseded,
}

/// Drives uploads and queries against the backend and records the results
/// in a `SessionStore`.
#[derive(Clone)]
pub struct AnalyzerController {
    api: Arc<dyn AnalyzerApi>,
}

impl AnalyzerController {
    #[must_use]
    pub fn new(api: Arc<dyn AnalyzerApi>) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn AnalyzerApi> {
        Arc::clone(&self.api)
    }

    pub fn edit_query(&self, store: &impl SessionStore, text: String) {
        let next = store.snapshot().apply(SessionEvent::QueryEdited(text));
        store.replace(next);
    }

    /// Fill the query field from a suggestion. Does not submit.
    pub fn choose_suggestion(&self, store: &impl SessionStore, suggestion: SuggestedQuery) {
        let next = store
            .snapshot()
            .apply(SessionEvent::SuggestionChosen(suggestion));
        store.replace(next);
    }

    pub async fn submit_upload(&self, store: &impl SessionStore, upload: FileUpload) -> SubmitOutcome {
        let (started, ticket) = store.snapshot().begin_upload();
        store.replace(started);

        log::info!(
            "upload {} started: {} ({} bytes)",
            ticket.seq(),
            upload.file_name(),
            upload.len()
        );
        let began = Instant::now();

        let event = match self.api.upload(upload).await {
            Ok(summary) => {
                log::info!(
                    "upload {} finished in {:.2?}: {} rows, {} columns",
                    ticket.seq(),
                    began.elapsed(),
                    summary.row_count(),
                    summary.column_names().len()
                );
                SessionEvent::UploadSucceeded(ticket, summary)
            }
            Err(err) => {
                log::warn!("upload {} failed after {:.2?}: {err}", ticket.seq(), began.elapsed());
                SessionEvent::RequestFailed(ticket, err.to_failure())
            }
        };

        settle(store, ticket, event)
    }

    /// Validate the current query and send it to the backend.
    pub async fn submit_query(&self, store: &impl SessionStore) -> SubmitOutcome {
        let (started, ticket, query) = match store.snapshot().begin_analyze() {
            Ok(started) => started,
            Err((rejected, err)) => {
                log::debug!("query rejected: {err}");
                store.replace(rejected);
                return SubmitOutcome::Rejected(err);
            }
        };
        store.replace(started);

        log::info!("analyze {} started: {:?}", ticket.seq(), query.text());
        let began = Instant::now();

        let event = match self.api.analyze(&query).await {
            Ok(result) => {
                log::info!(
                    "analyze {} finished in {:.2?}: {} chart points, {} table rows",
                    ticket.seq(),
                    began.elapsed(),
                    result.chart_points().len(),
                    result.table_rows().len()
                );
                SessionEvent::AnalyzeSucceeded(ticket, result)
            }
            Err(err) => {
                log::warn!("analyze {} failed after {:.2?}: {err}", ticket.seq(), began.elapsed());
                SessionEvent::RequestFailed(ticket, err.to_failure())
            }
        };

        settle(store, ticket, event)
    }
}

fn settle(store: &impl SessionStore, ticket: RequestTicket, event: SessionEvent) -> SubmitOutcome {
    let current = store.snapshot();
    if !current.is_current(ticket) {
        log::debug!("dropping stale response for request {}", ticket.seq());
        return SubmitOutcome::Superseded;
    }
    let outcome = if matches!(event, SessionEvent::RequestFailed(..)) {
        SubmitOutcome::Failed
    } else {
        SubmitOutcome::Completed
    };
    store.replace(current.apply(event));
    outcome
}
