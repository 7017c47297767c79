use serde::{Deserialize, Serialize};

/// Number of sample categories offered as one-click query suggestions.
pub const SUGGESTION_LIMIT: usize = 3;

/// Number of sample categories listed in the upload banner.
pub const SAMPLE_PREVIEW_LIMIT: usize = 5;

/// Column names grouped by the type the backend inferred for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTypes {
    #[serde(default)]
    pub numeric: Vec<String>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Metadata the backend returns after parsing an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    #[serde(rename = "rows", default)]
    row_count: u64,
    #[serde(rename = "columns", default)]
    column_names: Vec<String>,
    #[serde(rename = "sample_areas", default)]
    sample_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_preview: Option<String>,
    #[serde(rename = "data_types", default, skip_serializing_if = "Option::is_none")]
    column_types: Option<ColumnTypes>,
}

impl FileSummary {
    #[must_use]
    pub fn new(
        row_count: u64,
        column_names: Vec<String>,
        sample_categories: Vec<String>,
    ) -> Self {
        Self {
            row_count,
            column_names,
            sample_categories,
            ..Self::default()
        }
    }

    /// Attach the note and text preview sent for text-only documents.
    #[must_use]
    pub fn with_text_preview(mut self, note: impl Into<String>, preview: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self.text_preview = Some(preview.into());
        self
    }

    #[must_use]
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    #[must_use]
    pub fn sample_categories(&self) -> &[String] {
        &self.sample_categories
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    #[must_use]
    pub fn text_preview(&self) -> Option<&str> {
        self.text_preview.as_deref()
    }

    #[must_use]
    pub fn column_types(&self) -> Option<&ColumnTypes> {
        self.column_types.as_ref()
    }

    /// Sample categories shown in the upload banner.
    #[must_use]
    pub fn sample_preview(&self) -> &[String] {
        let end = self.sample_categories.len().min(SAMPLE_PREVIEW_LIMIT);
        &self.sample_categories[..end]
    }

    /// Canned queries built from the first few sample categories.
    #[must_use]
    pub fn suggested_queries(&self) -> Vec<SuggestedQuery> {
        self.sample_categories
            .iter()
            .take(SUGGESTION_LIMIT)
            .map(|category| SuggestedQuery::for_category(category))
            .collect()
    }
}

/// A one-click query shortcut derived from a sample category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedQuery {
    pub category: String,
    pub text: String,
}

impl SuggestedQuery {
    #[must_use]
    pub fn for_category(category: &str) -> Self {
        Self {
            category: category.to_string(),
            text: format!("Analyze {category}"),
        }
    }
}
