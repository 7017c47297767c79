use dioxus::prelude::*;

use crate::views::AnalyzerView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Data Analyzer" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "alert alert-danger fatal",
                        h4 { "The analyzer stopped rendering" }
                        pre { class: "summary-text", "{errors:?}" }
                    }
                },
                AnalyzerView {}
            }
        }
    }
}
