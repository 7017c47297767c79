use std::sync::Arc;

use services::AnalyzerController;

pub trait UiApp: Send + Sync {
    fn controller(&self) -> Arc<AnalyzerController>;

    /// Human-readable backend location for the page header.
    fn backend_label(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    controller: Arc<AnalyzerController>,
    backend_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            controller: app.controller(),
            backend_label: app.backend_label(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> Arc<AnalyzerController> {
        Arc::clone(&self.controller)
    }

    #[must_use]
    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
