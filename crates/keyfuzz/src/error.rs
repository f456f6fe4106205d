//! Error types

use thiserror::Error;

/// Errors that can occur while configuring or running a search
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// A key path is missing on an item or does not point to an acceptable value.
    ///
    /// `path` is empty when the item itself was expected to be a string.
    #[error("provided key '{path}' is either missing or does not point to a string value")]
    InvalidKey { path: String },

    /// Configuration that cannot be applied
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration document that does not parse
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FuzzyError {
    pub fn invalid_key(path: impl ToString) -> Self {
        Self::InvalidKey {
            path: path.to_string(),
        }
    }

    /// Returns true for [`FuzzyError::InvalidKey`]
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }
}

/// Result type for fuzzy search operations
pub type FuzzyResult<T> = Result<T, FuzzyError>;
