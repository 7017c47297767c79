use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use analyzer_core::model::{AnalysisResult, FileSummary, Query};

use crate::config::BackendConfig;
use crate::error::AnalyzerError;
use crate::upload::FileUpload;

const UPLOAD_PATH: &str = "api/upload/";
const ANALYZE_PATH: &str = "api/analyze/";
const HEALTH_PATH: &str = "api/health/";

/// The remote analysis backend.
#[async_trait]
pub trait AnalyzerApi: Send + Sync {
    /// Send a file for parsing and get back its metadata.
    async fn upload(&self, upload: FileUpload) -> Result<FileSummary, AnalyzerError>;

    /// Ask a question about the most recently uploaded file.
    async fn analyze(&self, query: &Query) -> Result<AnalysisResult, AnalyzerError>;

    /// Probe whether the backend is up.
    async fn health(&self) -> Result<HealthStatus, AnalyzerError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

#[derive(Clone)]
pub struct HttpAnalyzerClient {
    client: Client,
    config: BackendConfig,
}

impl HttpAnalyzerClient {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

#[async_trait]
impl AnalyzerApi for HttpAnalyzerClient {
    async fn upload(&self, upload: FileUpload) -> Result<FileSummary, AnalyzerError> {
        let url = self.config.endpoint(UPLOAD_PATH)?;
        let mime = upload.mime_hint();
        let file_name = upload.file_name().to_string();
        let mut part = Part::bytes(upload.into_bytes()).file_name(file_name);
        if let Some(mime) = mime {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .timeout(self.config.upload_timeout)
            .send()
            .await?;

        decode(response).await
    }

    async fn analyze(&self, query: &Query) -> Result<AnalysisResult, AnalyzerError> {
        let url = self.config.endpoint(ANALYZE_PATH)?;
        let payload = AnalyzeRequest {
            query: query.text(),
        };

        let response = self
            .client
            .post(url)
            .json(&payload)
            .timeout(self.config.analyze_timeout)
            .send()
            .await?;

        decode(response).await
    }

    async fn health(&self) -> Result<HealthStatus, AnalyzerError> {
        let url = self.config.endpoint(HEALTH_PATH)?;

        let response = self
            .client
            .get(url)
            .timeout(self.config.health_timeout)
            .send()
            .await?;

        decode(response).await
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AnalyzerError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(AnalyzerError::HttpStatus {
            status,
            message: backend_message(&body),
        });
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Pull the `error` field out of a failure body, if there is one.
fn backend_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}
