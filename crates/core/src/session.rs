//! Session state for the upload/query lifecycle.
//!
//! `SessionState` is an immutable snapshot. Every transition goes through
//! [`SessionState::apply`], which returns the next snapshot. Backend requests
//! carry a [`RequestTicket`]; completions for anything but the latest ticket
//! of their kind are dropped.

use thiserror::Error;

use crate::model::{AnalysisResult, FileSummary, Query, QueryError, RequestSeq, SuggestedQuery};

pub const NO_UPLOAD_MESSAGE: &str = "Please upload a file first";
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query";
pub const UPLOAD_TIMEOUT_MESSAGE: &str =
    "The server did not respond in time. It may still be starting up, please try again in a moment.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading file. Please check the file format.";
pub const ANALYZE_FAILED_MESSAGE: &str = "Error analyzing query. Please try again.";

/// Client-side rejections that never reach the backend.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("{}", NO_UPLOAD_MESSAGE)]
    NoUpload,
    #[error("{}", EMPTY_QUERY_MESSAGE)]
    EmptyQuery,
}

impl From<QueryError> for ValidationError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Empty => Self::EmptyQuery,
        }
    }
}

/// Why a backend request did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The client stopped waiting.
    Timeout,
    /// The backend answered with an error, optionally explaining it.
    Backend { message: Option<String> },
    /// The request never produced a usable response.
    Transport,
}

impl RequestFailure {
    fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty()),
            Self::Timeout | Self::Transport => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Upload,
    Analyze,
}

/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    kind: RequestKind,
    seq: RequestSeq,
}

impl RequestTicket {
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    #[must_use]
    pub fn seq(&self) -> RequestSeq {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    QueryEdited(String),
    SuggestionChosen(SuggestedQuery),
    Rejected(ValidationError),
    RequestStarted(RequestTicket),
    UploadSucceeded(RequestTicket, FileSummary),
    AnalyzeSucceeded(RequestTicket, AnalysisResult),
    RequestFailed(RequestTicket, RequestFailure),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    query: String,
    uploaded_file: Option<FileSummary>,
    last_error: Option<String>,
    last_result: Option<AnalysisResult>,
    last_seq: RequestSeq,
    upload_in_flight: Option<RequestSeq>,
    analyze_in_flight: Option<RequestSeq>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.upload_in_flight.is_some()
    }

    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.analyze_in_flight.is_some()
    }

    #[must_use]
    pub fn uploaded_file(&self) -> Option<&FileSummary> {
        self.uploaded_file.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    /// Issue a ticket for a new upload and mark it in flight.
    #[must_use]
    pub fn begin_upload(&self) -> (Self, RequestTicket) {
        let ticket = self.next_ticket(RequestKind::Upload);
        (self.apply(SessionEvent::RequestStarted(ticket)), ticket)
    }

    /// Validate the current query and, if it passes, mark an analyze request
    /// in flight.
    ///
    /// # Errors
    ///
    /// Returns the rejected snapshot (error message set, nothing else changed)
    /// alongside the `ValidationError` when no file has been uploaded or the
    /// query is blank.
    pub fn begin_analyze(&self) -> Result<(Self, RequestTicket, Query), (Self, ValidationError)> {
        match self.validate_query() {
            Ok(query) => {
                let ticket = self.next_ticket(RequestKind::Analyze);
                Ok((self.apply(SessionEvent::RequestStarted(ticket)), ticket, query))
            }
            Err(err) => Err((self.apply(SessionEvent::Rejected(err)), err)),
        }
    }

    /// Check the preconditions for an analyze request.
    ///
    /// # Errors
    ///
    /// `ValidationError::NoUpload` takes precedence over
    /// `ValidationError::EmptyQuery`.
    pub fn validate_query(&self) -> Result<Query, ValidationError> {
        if self.uploaded_file.is_none() {
            return Err(ValidationError::NoUpload);
        }
        Ok(Query::parse(&self.query)?)
    }

    /// Whether `ticket` is the newest request of its kind still awaiting a
    /// response.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        let in_flight = match ticket.kind {
            RequestKind::Upload => self.upload_in_flight,
            RequestKind::Analyze => self.analyze_in_flight,
        };
        in_flight == Some(ticket.seq)
    }

    #[must_use]
    pub fn apply(&self, event: SessionEvent) -> Self {
        let mut next = self.clone();
        match event {
            SessionEvent::QueryEdited(text) => next.query = text,
            SessionEvent::SuggestionChosen(suggestion) => next.query = suggestion.text,
            SessionEvent::Rejected(err) => next.last_error = Some(err.to_string()),
            SessionEvent::RequestStarted(ticket) => {
                next.last_seq = next.last_seq.max(ticket.seq);
                match ticket.kind {
                    // An answer about the previous file is stale once a new upload starts.
                    RequestKind::Upload => {
                        next.upload_in_flight = Some(ticket.seq);
                        next.analyze_in_flight = None;
                    }
                    RequestKind::Analyze => next.analyze_in_flight = Some(ticket.seq),
                }
                next.last_error = None;
                next.last_result = None;
            }
            SessionEvent::UploadSucceeded(ticket, summary) => {
                if !self.is_current(ticket) {
                    return next;
                }
                next.finish(ticket.kind);
                next.analyze_in_flight = None;
                next.uploaded_file = Some(summary);
                next.last_error = None;
            }
            SessionEvent::AnalyzeSucceeded(ticket, result) => {
                if !self.is_current(ticket) {
                    return next;
                }
                next.finish(ticket.kind);
                next.last_result = Some(result);
                next.last_error = None;
            }
            SessionEvent::RequestFailed(ticket, failure) => {
                if !self.is_current(ticket) {
                    return next;
                }
                next.finish(ticket.kind);
                next.last_error = Some(failure_message(ticket.kind, &failure));
                if ticket.kind == RequestKind::Upload {
                    next.uploaded_file = None;
                }
            }
        }
        next
    }

    fn next_ticket(&self, kind: RequestKind) -> RequestTicket {
        RequestTicket {
            kind,
            seq: self.last_seq.next(),
        }
    }

    fn finish(&mut self, kind: RequestKind) {
        match kind {
            RequestKind::Upload => self.upload_in_flight = None,
            RequestKind::Analyze => self.analyze_in_flight = None,
        }
    }
}

/// User-facing text for a failed request.
#[must_use]
pub fn failure_message(kind: RequestKind, failure: &RequestFailure) -> String {
    if let Some(message) = failure.backend_message() {
        return message.to_string();
    }
    match (kind, failure) {
        (RequestKind::Upload, RequestFailure::Timeout) => UPLOAD_TIMEOUT_MESSAGE.to_string(),
        (RequestKind::Upload, _) => UPLOAD_FAILED_MESSAGE.to_string(),
        (RequestKind::Analyze, _) => ANALYZE_FAILED_MESSAGE.to_string(),
    }
}
