use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of tabular output, keyed by column name in backend order.
pub type TableRow = Map<String, Value>;

/// Series label used when the backend does not name its chart series.
pub const DEFAULT_SERIES_LABEL: &str = "Value";

/// A single point on the result line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(alias = "year", deserialize_with = "category_text")]
    pub category: String,
    #[serde(alias = "price")]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChartPoint {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
            label: None,
        }
    }
}

/// Backend bookkeeping about the rows an answer was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub columns_used: Vec<String>,
}

/// The backend's answer to a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    summary: String,
    #[serde(rename = "chart_data", default, deserialize_with = "null_as_empty")]
    chart_points: Vec<ChartPoint>,
    #[serde(rename = "table_data", default, deserialize_with = "null_as_empty")]
    table_rows: Vec<TableRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<AnalysisMetadata>,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(
        summary: impl Into<String>,
        chart_points: Vec<ChartPoint>,
        table_rows: Vec<TableRow>,
    ) -> Self {
        Self {
            summary: summary.into(),
            chart_points,
            table_rows,
            metadata: None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn chart_points(&self) -> &[ChartPoint] {
        &self.chart_points
    }

    #[must_use]
    pub fn table_rows(&self) -> &[TableRow] {
        &self.table_rows
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&AnalysisMetadata> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn has_chart(&self) -> bool {
        !self.chart_points.is_empty()
    }

    #[must_use]
    pub fn has_table(&self) -> bool {
        !self.table_rows.is_empty()
    }

    /// Label for the chart series: the first point's label, or "Value".
    #[must_use]
    pub fn series_label(&self) -> &str {
        self.chart_points
            .first()
            .and_then(|point| point.label.as_deref())
            .unwrap_or(DEFAULT_SERIES_LABEL)
    }

    /// Column headers: the keys of the first row, in that row's order.
    #[must_use]
    pub fn table_columns(&self) -> Vec<&str> {
        self.table_rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

fn category_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(de::Error::custom(format!(
            "chart category must be text or a number, got {other}"
        ))),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
