mod analyzer;
mod query;
mod results;
mod state;
mod status;
mod upload;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use analyzer::{AnalyzerIntent, AnalyzerPage, AnalyzerView};
pub use state::{ViewError, ViewState, view_state_from_resource};
