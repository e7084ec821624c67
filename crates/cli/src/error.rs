use thiserror::Error;

/// Failures that end an interactive session.
///
/// Domain errors are reported to the user and never surface here.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
