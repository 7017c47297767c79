use dioxus::prelude::*;

use analyzer_core::model::SuggestedQuery;

#[component]
pub fn QueryCard(
    query: String,
    analyzing: bool,
    suggestions: Vec<SuggestedQuery>,
    on_edit: EventHandler<String>,
    on_suggest: EventHandler<SuggestedQuery>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "card query-card",
            h5 { class: "card-title", "💬 Step 2: Ask Anything!" }
            p { class: "text-muted small", "Ask questions about your data in natural language" }
            form {
                class: "query-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                input {
                    class: "form-control",
                    id: "query-input",
                    r#type: "text",
                    placeholder: "e.g., What are the trends? Show me top performers.",
                    value: "{query}",
                    disabled: analyzing,
                    oninput: move |evt| on_edit.call(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    id: "query-submit",
                    r#type: "submit",
                    disabled: analyzing,
                    if analyzing {
                        span { class: "spinner" }
                        "Analyzing..."
                    } else {
                        "🔍 Analyze"
                    }
                }
            }
            if !suggestions.is_empty() {
                div { class: "suggestions",
                    small { class: "text-muted", "Try these:" }
                    for suggestion in suggestions {
                        SuggestionButton { suggestion, disabled: analyzing, on_suggest }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionButton(
    suggestion: SuggestedQuery,
    disabled: bool,
    on_suggest: EventHandler<SuggestedQuery>,
) -> Element {
    let label = suggestion.text.clone();
    rsx! {
        button {
            class: "btn btn-sm btn-outline-secondary",
            r#type: "button",
            disabled,
            onclick: move |_| on_suggest.call(suggestion.clone()),
            "{label}"
        }
    }
}
