use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("All {failed} item(s) failed")]
    AllItemsFailed { failed: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preprocessing error: {0}")]
    Prep(#[from] imgprep::error::Error),
}
