#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod upload;

pub use client::{AnalyzerApi, HealthStatus, HttpAnalyzerClient};
pub use config::BackendConfig;
pub use controller::{AnalyzerController, LocalSession, SessionStore, SubmitOutcome};
pub use error::{AnalyzerError, ConfigError};
pub use upload::{ACCEPTED_EXTENSIONS, FileUpload};
