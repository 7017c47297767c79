use std::path::Path;

use crate::error::AnalyzerError;

/// Extensions offered by the file picker. The backend decides what it can parse.
pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["xlsx", "xls", "csv", "tsv", "pdf"];

/// A file selected for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl FileUpload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::Io` if the file cannot be read.
    pub async fn from_path(path: &Path) -> Result<Self, AnalyzerError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Content type hinted from the file extension, if it is one we offer.
    #[must_use]
    pub fn mime_hint(&self) -> Option<&'static str> {
        let extension = Path::new(&self.file_name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some("text/csv"),
            "tsv" => Some("text/tab-separated-values"),
            "pdf" => Some("application/pdf"),
            "xls" => Some("application/vnd.ms-excel"),
            "xlsx" => Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_hint_follows_extension() {
        assert_eq!(FileUpload::new("Sales.CSV", Vec::new()).mime_hint(), Some("text/csv"));
        assert_eq!(
            FileUpload::new("report.pdf", Vec::new()).mime_hint(),
            Some("application/pdf")
        );
        assert_eq!(FileUpload::new("notes.txt", Vec::new()).mime_hint(), None);
        assert_eq!(FileUpload::new("README", Vec::new()).mime_hint(), None);
    }

    #[tokio::test]
    async fn from_path_reads_name_and_bytes() {
        let path = std::env::temp_dir().join(format!("analyzer-upload-{}.csv", std::process::id()));
        tokio::fs::write(&path, b"Area,Price\nWakad,1500\n").await.unwrap();

        let upload = FileUpload::from_path(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(upload.file_name().starts_with("analyzer-upload-"));
        assert_eq!(upload.bytes(), b"Area,Price\nWakad,1500\n");
        assert_eq!(upload.mime_hint(), Some("text/csv"));
    }

    #[tokio::test]
    async fn from_path_reports_missing_file() {
        let missing = Path::new("definitely/not/here.csv");
        assert!(matches!(
            FileUpload::from_path(missing).await,
            Err(AnalyzerError::Io(_))
        ));
    }
}
