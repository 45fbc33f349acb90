//! Error types for keywatch.

/// Result type alias for keywatch operations.
pub type Result<T> = std::result::Result<T, KeywatchError>;

/// Errors that can occur while checking watched keys.
#[derive(Debug, thiserror::Error)]
pub enum KeywatchError {
    /// Failed to load a configuration document.
    #[error("Failed to load document: {0}")]
    LoadError(String),

    /// Failed to parse a configuration document or the watch list.
    #[error("Failed to parse {0}: {1}")]
    ParseError(String, #[source] serde_yaml::Error),

    /// The watch list parsed but does not have the expected shape.
    #[error("Invalid watch list: {0}")]
    InvalidWatchList(String),

    /// A required environment variable is not set.
    #[error("Required environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Failed to write the outcome line to the output sink.
    #[error("Failed to write outcome to {0}: {1}")]
    SinkError(String, #[source] std::io::Error),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
