use dioxus::prelude::*;

use analyzer_core::SessionState;
use analyzer_core::model::SuggestedQuery;
use services::{ACCEPTED_EXTENSIONS, FileUpload, SessionStore};

use crate::context::AppContext;
use crate::views::query::QueryCard;
use crate::views::results::ResultsPanel;
use crate::views::status::BackendStatus;
use crate::views::upload::UploadCard;
use crate::vm::FileSummaryVm;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum AnalyzerIntent {
    PickFile,
    Upload(FileUpload),
    EditQuery(String),
    Suggest(SuggestedQuery),
    Submit,
}

/// Session snapshots kept in a Dioxus signal.
#[derive(Clone, Copy)]
struct SignalSession(Signal<SessionState>);

impl SessionStore for SignalSession {
    fn snapshot(&self) -> SessionState {
        self.0.peek().clone()
    }

    fn replace(&self, next: SessionState) {
        let mut signal = self.0;
        signal.set(next);
    }
}

async fn pick_file() -> Option<FileUpload> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Choose a data file")
        .add_filter("Data files", &ACCEPTED_EXTENSIONS[..])
        .pick_file()
        .await?;
    match FileUpload::from_path(handle.path()).await {
        Ok(upload) => Some(upload),
        Err(err) => {
            log::warn!("could not read {}: {err}", handle.path().display());
            None
        }
    }
}

#[component]
pub fn AnalyzerView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = ctx.controller();
    let session = use_signal(SessionState::new);

    let dispatch = use_callback(move |intent: AnalyzerIntent| {
        let store = SignalSession(session);
        let controller = controller.clone();
        match intent {
            AnalyzerIntent::PickFile => {
                spawn(async move {
                    if let Some(upload) = pick_file().await {
                        controller.submit_upload(&store, upload).await;
                    }
                });
            }
            AnalyzerIntent::Upload(upload) => {
                spawn(async move {
                    controller.submit_upload(&store, upload).await;
                });
            }
            AnalyzerIntent::EditQuery(text) => controller.edit_query(&store, text),
            AnalyzerIntent::Suggest(suggestion) => controller.choose_suggestion(&store, suggestion),
            AnalyzerIntent::Submit => {
                spawn(async move {
                    controller.submit_query(&store).await;
                });
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AnalyzerTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let state = session.read().clone();

    rsx! {
        div { class: "page analyzer-page",
            header { class: "page-header",
                h1 { "📊 Universal Data Analyzer" }
                p { class: "lead", "Upload a data file and ask questions about it." }
                BackendStatus {}
            }
            AnalyzerPage { state, on_intent: move |intent| dispatch.call(intent) }
        }
    }
}

/// Everything below the header, rendered purely from a session snapshot.
#[component]
pub fn AnalyzerPage(state: SessionState, on_intent: EventHandler<AnalyzerIntent>) -> Element {
    let summary = state.uploaded_file().map(FileSummaryVm::from);
    let suggestions = summary
        .as_ref()
        .map(|vm| vm.suggestions.clone())
        .unwrap_or_default();
    let show_query = summary.is_some();
    let query = state.query().to_string();
    let analyzing = state.is_analyzing();
    let error = state.last_error().map(str::to_string);
    let result = state.last_result().cloned();

    rsx! {
        UploadCard {
            uploading: state.is_uploading(),
            summary,
            on_pick: move |()| on_intent.call(AnalyzerIntent::PickFile),
        }
        if show_query {
            QueryCard {
                query,
                analyzing,
                suggestions,
                on_edit: move |text| on_intent.call(AnalyzerIntent::EditQuery(text)),
                on_suggest: move |suggestion| on_intent.call(AnalyzerIntent::Suggest(suggestion)),
                on_submit: move |()| on_intent.call(AnalyzerIntent::Submit),
            }
        }
        if let Some(error) = error {
            div { class: "alert alert-danger", role: "alert", "{error}" }
        }
        if let Some(result) = result {
            ResultsPanel { result }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AnalyzerTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AnalyzerIntent>>>>,
    session: Rc<RefCell<Option<Signal<SessionState>>>>,
}

#[cfg(test)]
impl AnalyzerTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<AnalyzerIntent>, session: Signal<SessionState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<AnalyzerIntent> {
        (*self.dispatch.borrow()).expect("analyzer dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<SessionState> {
        (*self.session.borrow()).expect("analyzer session registered")
    }
}
