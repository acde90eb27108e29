/// Convenience result type used across Moodwall.
pub type MoodwallResult<T> = Result<T, MoodwallError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Missing or low-confidence detector input is never an error; only programming errors
/// (bad dimensions, bad configuration) and encoder failures surface here.
#[derive(thiserror::Error, Debug)]
pub enum MoodwallError {
    /// Invalid caller-provided data, such as zero-sized canvases.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while encoding a finished raster into an image container.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors while parsing or validating configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MoodwallError {
    /// Build a [`MoodwallError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MoodwallError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`MoodwallError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
