use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No labeled cells in --labels: {labels:?}")]
    NoLabels { labels: String },

    #[error("{failed} of {total} item(s) failed")]
    BatchFailed { failed: usize, total: usize },

    #[error(transparent)]
    Sheetcut(#[from] sheetcut::Error),
}
