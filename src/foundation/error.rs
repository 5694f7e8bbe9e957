/// Convenience result type used across inkmark.
pub type InkmarkResult<T> = Result<T, InkmarkError>;

/// Top-level error taxonomy used by library APIs.
///
/// Shape generation and orientation normalization are total and never produce one of these;
/// only pixel conversion and configuration loading can fail.
#[derive(thiserror::Error, Debug)]
pub enum InkmarkError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Caller bytes could not be interpreted as the expected pixel grid.
    #[error("conversion error: {0}")]
    Conversion(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkmarkError {
    /// Build an [`InkmarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InkmarkError::Conversion`] value.
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }

    /// Build an [`InkmarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
