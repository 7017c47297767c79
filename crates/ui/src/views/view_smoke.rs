use analyzer_core::model::{AnalysisResult, ChartPoint, FileSummary, SuggestedQuery, TableRow};
use analyzer_core::{RequestFailure, SessionEvent, SessionState};
use services::{AnalyzerError, FileUpload};

use crate::views::AnalyzerIntent;
use crate::views::test_harness::{StubBackend, render_page, setup_view_harness};

fn wakad_summary() -> FileSummary {
    FileSummary::new(
        120,
        vec!["Area".into(), "Year".into(), "Price".into()],
        vec!["Wakad".into(), "Baner".into(), "Hinjewadi".into(), "Aundh".into()],
    )
}

fn wakad_result() -> AnalysisResult {
    let row: TableRow = serde_json::from_value(serde_json::json!({
        "Area": "Wakad",
        "Price": 1500,
        "Units": 12
    }))
    .expect("row");
    AnalysisResult::new(
        "Wakad prices rose steadily.",
        vec![ChartPoint::new("2023", 100.0)],
        vec![row],
    )
}

fn uploaded_state() -> SessionState {
    let (state, ticket) = SessionState::new().begin_upload();
    state.apply(SessionEvent::UploadSucceeded(ticket, wakad_summary()))
}

fn answered_state(result: AnalysisResult) -> SessionState {
    let state = uploaded_state().apply(SessionEvent::SuggestionChosen(
        SuggestedQuery::for_category("Wakad"),
    ));
    let (state, ticket, _) = state.begin_analyze().expect("query is valid");
    state.apply(SessionEvent::AnalyzeSucceeded(ticket, result))
}

#[tokio::test(flavor = "current_thread")]
async fn query_card_is_hidden_until_a_file_is_uploaded() {
    let html = render_page(SessionState::new());

    assert!(html.contains("upload-pick"));
    assert!(!html.contains("query-input"));
    assert!(!html.contains("alert-danger"));
}

#[tokio::test(flavor = "current_thread")]
async fn upload_banner_lists_summary_and_three_suggestions() {
    let html = render_page(uploaded_state());

    assert!(html.contains("File uploaded successfully!"));
    assert!(html.contains("Area, Year, Price"));
    assert!(html.contains("Wakad, Baner, Hinjewadi, Aundh"));
    assert!(html.contains("query-input"));
    assert!(html.contains("Analyze Wakad"));
    assert!(html.contains("Analyze Hinjewadi"));
    assert!(!html.contains("Analyze Aundh"));
}

#[tokio::test(flavor = "current_thread")]
async fn results_render_summary_chart_and_formatted_table() {
    let html = render_page(answered_state(wakad_result()));

    assert!(html.contains("Wakad prices rose steadily."));
    assert!(html.contains("summary-text"));
    assert!(html.contains("<svg"));
    assert!(!html.contains("The chart could not be drawn."));
    assert!(html.contains("Detailed Data (1 rows)"));
    assert!(html.contains("₹1,500"));
    assert!(html.contains("<td>12</td>"));
    assert!(!html.contains("₹12"));
}

#[tokio::test(flavor = "current_thread")]
async fn summary_only_result_skips_chart_and_table() {
    let html = render_page(answered_state(AnalysisResult::new(
        "Nothing to plot.",
        Vec::new(),
        Vec::new(),
    )));

    assert!(html.contains("Nothing to plot."));
    assert!(!html.contains("<svg"));
    assert!(!html.contains("<table"));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_request_shows_error_alert() {
    let (state, ticket) = SessionState::new().begin_upload();
    let state = state.apply(SessionEvent::RequestFailed(ticket, RequestFailure::Timeout));

    let html = render_page(state);

    assert!(html.contains("alert-danger"));
    assert!(html.contains("did not respond in time"));
    assert!(!html.contains("query-input"));
}

#[tokio::test(flavor = "current_thread")]
async fn in_flight_requests_disable_their_controls() {
    let (uploading, _) = SessionState::new().begin_upload();
    let html = render_page(uploading);
    assert!(html.contains("Uploading file..."));
    assert!(html.contains("disabled"));

    let state = uploaded_state().apply(SessionEvent::QueryEdited("trend".into()));
    let (analyzing, _, _) = state.begin_analyze().expect("query is valid");
    let html = render_page(analyzing);
    assert!(html.contains("Analyzing..."));
    assert!(html.contains("disabled"));
}

#[tokio::test(flavor = "current_thread")]
async fn upload_then_suggestion_renders_the_answer() {
    let backend = StubBackend {
        healthy: true,
        ..StubBackend::default()
    };
    backend
        .uploads
        .lock()
        .expect("uploads lock")
        .push_back(Ok(wakad_summary()));
    backend
        .analyses
        .lock()
        .expect("analyses lock")
        .push_back(Ok(wakad_result()));
    let mut harness = setup_view_harness(backend);
    harness.rebuild();
    harness.drive_async().await;

    assert!(harness.render().contains("Online"));

    harness.dispatch(AnalyzerIntent::Upload(FileUpload::new(
        "prices.csv",
        b"Area,Price\nWakad,1500\n".to_vec(),
    )));
    harness.drive_async().await;
    assert!(harness.session().uploaded_file().is_some());
    assert!(!harness.session().is_uploading());

    harness.dispatch(AnalyzerIntent::Suggest(SuggestedQuery::for_category("Wakad")));
    harness.drive_async().await;
    assert_eq!(harness.session().query(), "Analyze Wakad");
    assert!(harness.session().last_result().is_none());

    harness.dispatch(AnalyzerIntent::Submit);
    harness.drive_async().await;

    let session = harness.session();
    assert!(!session.is_analyzing());
    assert!(session.last_result().is_some());
    let html = harness.render();
    assert!(html.contains("₹1,500"));
    assert!(html.contains("Wakad prices rose steadily."));
}

#[tokio::test(flavor = "current_thread")]
async fn submit_before_upload_shows_the_upload_prompt() {
    let mut harness = setup_view_harness(StubBackend::default());
    harness.rebuild();

    harness.dispatch(AnalyzerIntent::EditQuery("top areas".into()));
    harness.dispatch(AnalyzerIntent::Submit);
    harness.drive_async().await;

    let session = harness.session();
    assert_eq!(session.last_error(), Some("Please upload a file first"));
    assert!(harness.render().contains("Please upload a file first"));
}

#[tokio::test(flavor = "current_thread")]
async fn upload_timeout_clears_busy_state_and_reports_it() {
    let backend = StubBackend::default();
    backend
        .uploads
        .lock()
        .expect("uploads lock")
        .push_back(Err(AnalyzerError::Timeout));
    let mut harness = setup_view_harness(backend);
    harness.rebuild();

    harness.dispatch(AnalyzerIntent::Upload(FileUpload::new("big.xlsx", vec![1, 2, 3])));
    harness.drive_async().await;

    let session = harness.session();
    assert!(!session.is_uploading());
    assert!(session.uploaded_file().is_none());
    let html = harness.render();
    assert!(html.contains("did not respond in time"));
    assert!(html.contains("Backend unreachable"));
}
