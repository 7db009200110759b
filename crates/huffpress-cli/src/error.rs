//! Command-line errors.

/// Errors surfaced by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] huffpress_core::Error),

    #[error("output is {0} bytes of binary data and cannot be displayed; use --out-file")]
    NotDisplayable(usize),

    #[error("invalid configuration file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Result type for command-line operations
pub type CliResult<T> = Result<T, CliError>;
