use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use analyzer_core::SessionState;
use analyzer_core::model::{AnalysisResult, FileSummary, Query};
use services::{AnalyzerApi, AnalyzerController, AnalyzerError, FileUpload, HealthStatus};

use crate::context::{UiApp, build_app_context};
use crate::views::analyzer::AnalyzerTestHandles;
use crate::views::{AnalyzerIntent, AnalyzerPage, AnalyzerView};

type Reply<T> = Result<T, AnalyzerError>;

/// Backend double that replays queued replies.
#[derive(Default)]
pub struct StubBackend {
    pub uploads: Mutex<VecDeque<Reply<FileSummary>>>,
    pub analyses: Mutex<VecDeque<Reply<AnalysisResult>>>,
    pub healthy: bool,
}

#[async_trait]
impl AnalyzerApi for StubBackend {
    async fn upload(&self, _upload: FileUpload) -> Result<FileSummary, AnalyzerError> {
        self.uploads
            .lock()
            .expect("uploads lock")
            .pop_front()
            .unwrap_or(Err(AnalyzerError::Timeout))
    }

    async fn analyze(&self, _query: &Query) -> Result<AnalysisResult, AnalyzerError> {
        self.analyses
            .lock()
            .expect("analyses lock")
            .pop_front()
            .unwrap_or(Err(AnalyzerError::Timeout))
    }

    async fn health(&self) -> Result<HealthStatus, AnalyzerError> {
        if self.healthy {
            Ok(HealthStatus {
                status: "running".into(),
            })
        } else {
            Err(AnalyzerError::Timeout)
        }
    }
}

struct TestApp {
    controller: Arc<AnalyzerController>,
}

impl UiApp for TestApp {
    fn controller(&self) -> Arc<AnalyzerController> {
        Arc::clone(&self.controller)
    }

    fn backend_label(&self) -> String {
        "http://stub.test".into()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: AnalyzerTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { AnalyzerView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: AnalyzerTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn dispatch(&self, intent: AnalyzerIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    pub fn session(&self) -> SessionState {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.read().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(backend: StubBackend) -> ViewHarness {
    let api: Arc<dyn AnalyzerApi> = Arc::new(backend);
    let app = Arc::new(TestApp {
        controller: Arc::new(AnalyzerController::new(api)),
    });
    let handles = AnalyzerTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}

#[derive(Props, Clone, PartialEq)]
struct PageHarnessProps {
    state: SessionState,
}

#[component]
fn PageHarnessRoot(props: PageHarnessProps) -> Element {
    rsx! {
        AnalyzerPage { state: props.state.clone(), on_intent: move |_| {} }
    }
}

/// Render the page body for a fixed session snapshot.
pub fn render_page(state: SessionState) -> String {
    let mut dom = VirtualDom::new_with_props(PageHarnessRoot, PageHarnessProps { state });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
