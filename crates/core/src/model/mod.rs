mod analysis;
mod file_summary;
mod ids;
mod query;

pub use analysis::{AnalysisMetadata, AnalysisResult, ChartPoint, DEFAULT_SERIES_LABEL, TableRow};
pub use file_summary::{
    ColumnTypes, FileSummary, SAMPLE_PREVIEW_LIMIT, SUGGESTION_LIMIT, SuggestedQuery,
};
pub use ids::RequestSeq;
pub use query::{Query, QueryError};
