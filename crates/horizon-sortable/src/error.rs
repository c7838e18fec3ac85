//! Error types for the sortable engine.

use std::path::PathBuf;

use horizon_sortable_core::SignalError;

/// Result type alias for sortable operations.
pub type Result<T> = std::result::Result<T, SortableError>;

/// Errors that can occur in the sortable engine.
///
/// Lookup misses and out-of-range reorders are not errors; they resolve to
/// `None` or to an unchanged collection.
#[derive(Debug, thiserror::Error)]
pub enum SortableError {
    /// A component asked for the store outside of a provider.
    #[error("sortable store accessed outside of a SortableStoreProvider")]
    MissingStoreContext,

    /// Signal-related error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),

    /// Configuration could not be parsed.
    #[error("Invalid sortable configuration: {message}")]
    Config { message: String },

    /// Configuration file could not be read.
    #[error("Failed to read sortable configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SortableError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
