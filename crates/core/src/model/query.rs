use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    #[error("query is empty")]
    Empty,
}

/// Natural-language question sent to the analyze endpoint.
///
/// Always non-empty after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Validate raw user input.
    ///
    /// The original text is kept as typed; only the emptiness check trims.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Empty` when the text is empty or whitespace-only.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        if raw.trim().is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}
