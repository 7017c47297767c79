use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use env_logger::Env;
use services::{AnalyzerApi, AnalyzerController, BackendConfig, HttpAnalyzerClient};
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    controller: Arc<AnalyzerController>,
    backend_label: String,
}

impl UiApp for DesktopApp {
    fn controller(&self) -> Arc<AnalyzerController> {
        Arc::clone(&self.controller)
    }

    fn backend_label(&self) -> String {
        self.backend_label.clone()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; the process environment still applies.
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = BackendConfig::from_env()?;
    let backend_label = config.base_url().as_str().trim_end_matches('/').to_string();
    log::info!(
        "using analysis backend at {backend_label} (upload timeout {:?}, analyze timeout {:?})",
        config.upload_timeout,
        config.analyze_timeout
    );

    let api: Arc<dyn AnalyzerApi> = Arc::new(HttpAnalyzerClient::new(config));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        controller: Arc::new(AnalyzerController::new(api)),
        backend_label,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Data Analyzer")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
