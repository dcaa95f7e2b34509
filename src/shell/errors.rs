use thiserror::Error;

/// Errors raised by the game shell. The game itself never fails.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading player input or writing the transcript to the terminal failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Transcript export could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),
}
