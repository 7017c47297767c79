use dioxus::prelude::*;

use analyzer_core::model::AnalysisResult;

use crate::vm::{ChartVm, TableVm, build_chart, build_table, render_line_chart};

#[component]
pub fn ResultsPanel(result: AnalysisResult) -> Element {
    let chart = build_chart(&result);
    let table = build_table(result.table_rows());
    let summary = result.summary().to_string();

    rsx! {
        div { class: "results",
            section { class: "card result-card",
                header { class: "card-header card-header--primary", h5 { "🤖 AI Analysis" } }
                pre { class: "summary-text", "{summary}" }
            }
            if let Some(chart) = chart {
                ChartCard { chart }
            }
            if let Some(table) = table {
                TableCard { table }
            }
        }
    }
}

#[component]
fn ChartCard(chart: ChartVm) -> Element {
    let svg = match render_line_chart(&chart) {
        Ok(svg) => Some(svg),
        Err(err) => {
            log::warn!("chart rendering failed: {err}");
            None
        }
    };

    rsx! {
        section { class: "card result-card",
            header { class: "card-header card-header--success", h5 { "📈 Trend" } }
            if let Some(svg) = svg {
                div {
                    class: "line-chart",
                    role: "img",
                    aria_label: "{chart.series_label} by category",
                    dangerous_inner_html: svg,
                }
            } else {
                p { class: "text-muted small", "The chart could not be drawn." }
            }
        }
    }
}

#[component]
fn TableCard(table: TableVm) -> Element {
    let title = table.title();
    rsx! {
        section { class: "card result-card",
            header { class: "card-header card-header--info", h5 { "📋 {title}" } }
            div { class: "table-responsive",
                table { class: "table table-striped",
                    thead {
                        tr {
                            for column in table.columns.iter() {
                                th { "{column}" }
                            }
                        }
                    }
                    tbody {
                        for row in table.rows.iter() {
                            tr {
                                for cell in row.iter() {
                                    td { "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
