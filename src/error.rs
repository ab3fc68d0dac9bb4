//! Error types for the xls-preview pipeline.

use std::io;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors that can occur while fetching and previewing a workbook.
#[derive(Error, Debug)]
pub enum AppError {
    /// The input could not be interpreted as an http(s) URL.
    #[error("invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    /// The request failed or the server answered with a non-success status.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    /// The downloaded bytes are not a readable legacy Excel workbook.
    #[error("invalid file format")]
    InvalidFormat(#[from] calamine::XlsError),

    /// A target sheet is missing from the workbook. Never aborts a run.
    #[error("sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    /// Reading the prompt answer or writing the report failed.
    #[error("I/O error")]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn invalid_url(input: &str, reason: impl Into<String>) -> Self {
        AppError::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error ends the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::SheetNotFound(_))
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::SheetNotFound(_) => 0,
            AppError::Io(_) => 1,
            AppError::InvalidUrl { .. } => 2,
            AppError::Network(_) => 3,
            AppError::InvalidFormat(_) => 4,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_not_found_is_not_fatal() {
        let err = AppError::SheetNotFound("VISTAS".to_string());
        assert!(!err.is_fatal());
        assert_eq!(err.exit_code(), 0);
        assert_eq!(err.to_string(), "sheet 'VISTAS' not found in workbook");
    }

    #[test]
    fn fatal_errors_have_distinct_nonzero_codes() {
        let url = AppError::invalid_url("nope", "relative URL without a base");
        let io = AppError::Io(io::Error::other("closed"));

        assert!(url.is_fatal());
        assert_eq!(url.exit_code(), 2);
        assert_eq!(io.exit_code(), 1);
        assert!(url.to_string().starts_with("invalid URL 'nope'"));
    }

    #[test]
    fn wrapped_errors_are_named_once_in_the_chain() {
        let err = AppError::InvalidFormat(calamine::XlsError::Io(io::Error::other("bad header")));
        let chain = format!("{:#}", anyhow::Error::from(err));

        assert!(chain.starts_with("invalid file format: I/O error: bad header"));
        assert_eq!(chain.matches("invalid file format").count(), 1);

        let io = AppError::Io(io::Error::other("broken pipe"));
        assert_eq!(format!("{:#}", anyhow::Error::from(io)), "I/O error: broken pipe");
    }
}
