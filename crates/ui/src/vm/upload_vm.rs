use analyzer_core::model::{FileSummary, SuggestedQuery};

const DEFAULT_HEADLINE: &str = "File uploaded successfully!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummaryVm {
    pub headline: String,
    pub rows_label: String,
    pub columns_label: String,
    pub samples_label: Option<String>,
    pub note: Option<String>,
    pub text_preview: Option<String>,
    pub suggestions: Vec<SuggestedQuery>,
}

impl From<&FileSummary> for FileSummaryVm {
    fn from(summary: &FileSummary) -> Self {
        let samples = summary.sample_preview();
        Self {
            headline: summary
                .message()
                .map_or_else(|| DEFAULT_HEADLINE.to_string(), str::to_string),
            rows_label: summary.row_count().to_string(),
            columns_label: summary.column_names().join(", "),
            samples_label: (!samples.is_empty()).then(|| samples.join(", ")),
            note: summary.note().map(str::to_string),
            text_preview: summary.text_preview().map(str::to_string),
            suggestions: summary.suggested_queries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_join_columns_and_cap_samples() {
        let summary = FileSummary::new(
            42,
            vec!["Area".into(), "Year".into()],
            (1..=7).map(|i| format!("A{i}")).collect(),
        );

        let vm = FileSummaryVm::from(&summary);

        assert_eq!(vm.headline, DEFAULT_HEADLINE);
        assert_eq!(vm.rows_label, "42");
        assert_eq!(vm.columns_label, "Area, Year");
        assert_eq!(vm.samples_label.as_deref(), Some("A1, A2, A3, A4, A5"));
        assert_eq!(vm.suggestions.len(), 3);
    }

    #[test]
    fn no_samples_means_no_sample_line() {
        let summary = FileSummary::new(0, Vec::new(), Vec::new())
            .with_text_preview("Text only.", "Lorem ipsum...");

        let vm = FileSummaryVm::from(&summary);

        assert_eq!(vm.samples_label, None);
        assert!(vm.suggestions.is_empty());
        assert_eq!(vm.note.as_deref(), Some("Text only."));
        assert_eq!(vm.text_preview.as_deref(), Some("Lorem ipsum..."));
    }
}
