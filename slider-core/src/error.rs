//! Error types for the slider core.

use slider_model::ListKeyError;

/// Errors surfaced by the slider core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Raw `(section, category)` segments that name no list.
    #[error(transparent)]
    ListKey(#[from] ListKeyError),
    /// A carousel config value outside its allowed range.
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),
}

/// Result alias for slider core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
