use dioxus::prelude::*;

use services::ACCEPTED_EXTENSIONS;

use crate::vm::FileSummaryVm;

#[component]
pub fn UploadCard(
    uploading: bool,
    summary: Option<FileSummaryVm>,
    on_pick: EventHandler<()>,
) -> Element {
    let formats = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        section { class: "card upload-card",
            h5 { class: "card-title", "📁 Step 1: Upload Your Data" }
            p { class: "text-muted small", "Supported: {formats}" }
            button {
                class: "btn btn-outline-primary",
                id: "upload-pick",
                r#type: "button",
                disabled: uploading,
                onclick: move |_| on_pick.call(()),
                "Choose file..."
            }
            if uploading {
                div { class: "alert alert-info", role: "status",
                    span { class: "spinner" }
                    "Uploading file... a backend that was idle can take up to a minute to respond."
                }
            }
            if let Some(summary) = summary {
                FileSummaryBanner { summary }
            }
        }
    }
}

#[component]
fn FileSummaryBanner(summary: FileSummaryVm) -> Element {
    rsx! {
        div { class: "alert alert-success",
            "✅ {summary.headline}"
            div { class: "small",
                strong { "Rows:" }
                " {summary.rows_label} | "
                strong { "Columns:" }
                " {summary.columns_label}"
            }
            if let Some(samples) = summary.samples_label {
                div { class: "small",
                    strong { "Sample Areas:" }
                    " {samples}"
                }
            }
            if let Some(note) = summary.note {
                p { class: "small upload-note", "{note}" }
            }
            if let Some(preview) = summary.text_preview {
                pre { class: "upload-preview", "{preview}" }
            }
        }
    }
}
