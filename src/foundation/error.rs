/// Convenience result type used across the crate.
pub type PageResult<T> = Result<T, PageError>;

/// Top-level error type for page configuration, manifest parsing and animation setup.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    /// Invalid page configuration or constructor input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Manifest fetch or decode failure.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// A single media asset could not be resolved.
    #[error("asset error: {0}")]
    Asset(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageError {
    /// Build a [`PageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PageError::Manifest`] value.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Build a [`PageError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`PageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
