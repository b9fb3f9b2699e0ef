use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum BarError {
    /// A required call argument was absent. The call is rejected before any
    /// state is mutated.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("unknown method: {0}")]
    UnknownMethod(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BarError> = std::result::Result<T, E>;
